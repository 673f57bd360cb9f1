/// Named dataset subset. Each split is defined by its ID list file under
/// `ImageSets/Main/<split>.txt`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    #[default]
    Train,
    Val,
    Test,
}

impl Split {
    pub fn from_str(split: &str) -> Option<Self> {
        match split.to_lowercase().as_str() {
            "train" => Some(Split::Train),
            "val" => Some(Split::Val),
            "test" => Some(Split::Test),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
            Split::Test => "test",
        }
    }

    /// File name of the split's ID list, e.g. `train.txt`.
    pub fn list_file_name(&self) -> String {
        format!("{}.txt", self.as_str())
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use crate::data::{VocBox, VocLabels};
use crate::error::VocError;

/// Parses a VOC annotation file into `(boxes, labels)`.
///
/// `<object>` elements are visited in document order. Objects whose
/// `<difficult>` flag is `1` are omitted entirely, so the two returned lists
/// stay equal in length and order-aligned for the remaining objects. Corner
/// coordinates are shifted from the file's 1-based convention to zero-based.
pub fn load_annotation(
    path: &Path,
    labels: &VocLabels,
) -> Result<(Vec<VocBox>, Vec<usize>), VocError> {
    let text = fs::read_to_string(path).map_err(|source| VocError::AnnotationRead {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = Document::parse(&text).map_err(|err| parse_error(path, err.to_string()))?;

    let mut boxes = Vec::new();
    let mut box_labels = Vec::new();
    for obj in doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("object"))
    {
        if int_field(path, &obj, "difficult")? == 1 {
            continue;
        }
        let bndbox = child_element(path, &obj, "bndbox")?;
        boxes.push(VocBox::from_voc_corners(
            int_field(path, &bndbox, "xmin")?,
            int_field(path, &bndbox, "ymin")?,
            int_field(path, &bndbox, "xmax")?,
            int_field(path, &bndbox, "ymax")?,
        ));
        let name = text_field(path, &obj, "name")?.trim().to_lowercase();
        box_labels.push(labels.name_to_label(&name)?);
    }
    Ok((boxes, box_labels))
}

fn parse_error(path: &Path, detail: String) -> VocError {
    VocError::AnnotationParse {
        path: path.to_path_buf(),
        detail,
    }
}

fn child_element<'a, 'input>(
    path: &Path,
    node: &Node<'a, 'input>,
    tag: &str,
) -> Result<Node<'a, 'input>, VocError> {
    node.children()
        .find(|n| n.has_tag_name(tag))
        .ok_or_else(|| parse_error(path, format!("missing <{tag}> element")))
}

fn text_field<'a>(path: &Path, node: &Node<'a, '_>, tag: &str) -> Result<&'a str, VocError> {
    let child = child_element(path, node, tag)?;
    child
        .text()
        .ok_or_else(|| parse_error(path, format!("<{tag}> element is empty")))
}

fn int_field(path: &Path, node: &Node, tag: &str) -> Result<i32, VocError> {
    let text = text_field(path, node, tag)?;
    text.trim()
        .parse::<i32>()
        .map_err(|_| parse_error(path, format!("<{tag}> is not an integer: '{text}'")))
}

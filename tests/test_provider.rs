use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use voc_provider::common::VocDataProvider;
use voc_provider::data::{Split, VocBox, VocLabels};
use voc_provider::VocError;

struct VocObject {
    name: &'static str,
    difficult: u8,
    bndbox: (i32, i32, i32, i32),
}

fn write_annotation(root: &Path, id: &str, objects: &[VocObject]) {
    let mut xml = String::from("<annotation>\n");
    for obj in objects {
        let (xmin, ymin, xmax, ymax) = obj.bndbox;
        xml.push_str(&format!(
            "  <object>\n    <name>{}</name>\n    <difficult>{}</difficult>\n    \
             <bndbox><xmin>{xmin}</xmin><ymin>{ymin}</ymin><xmax>{xmax}</xmax><ymax>{ymax}</ymax></bndbox>\n  </object>\n",
            obj.name, obj.difficult
        ));
    }
    xml.push_str("</annotation>\n");
    fs::write(root.join("Annotations").join(format!("{id}.xml")), xml).unwrap();
}

fn write_image(root: &Path, id: &str, width: u32, height: u32) {
    let image = RgbImage::from_pixel(width, height, Rgb([80, 120, 160]));
    image
        .save(root.join("JPEGImages").join(format!("{id}.jpg")))
        .unwrap();
}

fn voc_root(ids: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("JPEGImages")).unwrap();
    fs::create_dir_all(root.join("Annotations")).unwrap();
    fs::create_dir_all(root.join("ImageSets").join("Main")).unwrap();
    let list: String = ids.iter().map(|id| format!("{id}\n")).collect();
    fs::write(root.join("ImageSets").join("Main").join("train.txt"), list).unwrap();
    dir
}

fn train_provider(root: &Path) -> VocDataProvider {
    VocDataProvider::new(root, Split::Train, VocLabels::voc2007()).unwrap()
}

#[test]
fn end_to_end_single_car_sample() {
    let dir = voc_root(&["000001"]);
    write_image(dir.path(), "000001", 64, 48);
    write_annotation(
        dir.path(),
        "000001",
        &[VocObject {
            name: "car",
            difficult: 0,
            bndbox: (10, 10, 50, 50),
        }],
    );

    let provider = train_provider(dir.path());
    assert_eq!(provider.len(), 1);

    let sample = provider.get(0).unwrap();
    assert_eq!((sample.width(), sample.height()), (64, 48));
    assert_eq!(sample.boxes, vec![VocBox::new(9, 9, 49, 49)]);
    assert_eq!(
        sample.labels,
        vec![provider.labels().name_to_label("car").unwrap()]
    );
}

#[test]
fn index_preserves_split_file_order() {
    let dir = voc_root(&["000009", "000002", "000002", "000005"]);
    let provider = train_provider(dir.path());

    assert_eq!(provider.len(), 4);
    // Line order exactly: no sorting, no deduplication.
    assert_eq!(provider.ids(), ["000009", "000002", "000002", "000005"]);
    assert_eq!(provider.id_at(1).unwrap(), "000002");
}

#[test]
fn out_of_range_access_is_rejected_at_both_bounds() {
    let dir = voc_root(&["000001", "000002"]);
    write_image(dir.path(), "000002", 8, 8);
    write_annotation(dir.path(), "000002", &[]);

    let provider = train_provider(dir.path());
    // Last valid index still loads.
    assert!(provider.get(provider.len() - 1).is_ok());
    assert!(matches!(
        provider.get(provider.len()),
        Err(VocError::IndexOutOfRange { index: 2, len: 2 })
    ));
    assert!(matches!(
        provider.get(usize::MAX),
        Err(VocError::IndexOutOfRange { .. })
    ));
}

#[test]
fn difficult_objects_are_excluded_from_the_sample() {
    let dir = voc_root(&["000003"]);
    write_image(dir.path(), "000003", 32, 32);
    write_annotation(
        dir.path(),
        "000003",
        &[
            VocObject {
                name: "person",
                difficult: 1,
                bndbox: (1, 1, 10, 10),
            },
            VocObject {
                name: "dog",
                difficult: 0,
                bndbox: (5, 6, 20, 21),
            },
            VocObject {
                name: "cat",
                difficult: 1,
                bndbox: (2, 2, 12, 12),
            },
        ],
    );

    let provider = train_provider(dir.path());
    let sample = provider.get(0).unwrap();
    assert_eq!(sample.num_objects(), 1);
    assert_eq!(sample.boxes, vec![VocBox::new(4, 5, 19, 20)]);
    assert_eq!(
        sample.labels,
        vec![provider.labels().name_to_label("dog").unwrap()]
    );
}

#[test]
fn missing_list_file_fails_construction() {
    let dir = voc_root(&["000001"]);
    let err = VocDataProvider::new(dir.path(), Split::Val, VocLabels::voc2007()).unwrap_err();
    assert!(matches!(err, VocError::SplitListRead { .. }));
}

#[test]
fn empty_list_file_fails_construction() {
    let dir = voc_root(&[]);
    let err = VocDataProvider::new(dir.path(), Split::Train, VocLabels::voc2007()).unwrap_err();
    assert!(matches!(err, VocError::SplitListEmpty { .. }));
}

#[test]
fn missing_files_fail_at_load_time_not_construction() {
    // IDs with no backing files index fine; the failure is per-sample.
    let dir = voc_root(&["000404"]);
    let provider = train_provider(dir.path());
    assert_eq!(provider.len(), 1);

    let err = provider.get(0).unwrap_err();
    assert!(matches!(err, VocError::ImageRead { .. }));
}

#[test]
fn undecodable_image_is_distinct_from_missing() {
    let dir = voc_root(&["000007"]);
    fs::write(
        dir.path().join("JPEGImages").join("000007.jpg"),
        b"not an image",
    )
    .unwrap();
    write_annotation(dir.path(), "000007", &[]);

    let err = train_provider(dir.path()).get(0).unwrap_err();
    assert!(matches!(err, VocError::ImageDecode { .. }));
}

#[test]
fn malformed_annotation_fails_the_sample() {
    let dir = voc_root(&["000008"]);
    write_image(dir.path(), "000008", 16, 16);
    fs::write(
        dir.path().join("Annotations").join("000008.xml"),
        "<annotation><object>",
    )
    .unwrap();

    let err = train_provider(dir.path()).get(0).unwrap_err();
    assert!(matches!(err, VocError::AnnotationParse { .. }));
}

#[test]
fn unknown_class_in_annotation_propagates() {
    let dir = voc_root(&["000011"]);
    write_image(dir.path(), "000011", 16, 16);
    write_annotation(
        dir.path(),
        "000011",
        &[VocObject {
            name: "dragon",
            difficult: 0,
            bndbox: (1, 1, 5, 5),
        }],
    );

    let err = train_provider(dir.path()).get(0).unwrap_err();
    assert!(matches!(err, VocError::UnknownClass { name } if name == "dragon"));
}

#[test]
fn iterator_yields_samples_in_index_order() {
    let dir = voc_root(&["000021", "000022"]);
    for (id, w) in [("000021", 10u32), ("000022", 20u32)] {
        write_image(dir.path(), id, w, 10);
        write_annotation(dir.path(), id, &[]);
    }

    let provider = train_provider(dir.path());
    let widths: Vec<u32> = provider
        .iter()
        .map(|sample| sample.unwrap().width())
        .collect();
    assert_eq!(widths, vec![10, 20]);
}

#[test]
fn open_split_uses_the_voc2007_registry() {
    let dir = voc_root(&["000001"]);
    let provider = voc_provider::open_split(dir.path(), Split::Train).unwrap();
    assert_eq!(provider.labels().len(), 20);
    assert_eq!(provider.split(), Split::Train);
}

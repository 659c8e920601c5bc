use std::io::Cursor;

use crate::ParserError;
use crate::common::writer::{write_chunk, write_version_chunk};
use crate::package::reader::PackageReader;
use crate::package::types::{Package, PackageCategory};

fn sample_package() -> Package {
    Package {
        categories: vec![
            PackageCategory::new("model")
                .with_file("model", "object/common/spring/spring.xno")
                .with_file("broken", "object/common/spring/spring_broken.xno"),
            PackageCategory::new("texture").with_file("diffuse", "object/common/spring/spring.dds"),
        ],
    }
}

#[test]
fn parse_written_package() -> Result<(), anyhow::Error> {
    let mut buf = Vec::new();
    sample_package().write(&mut buf)?;

    let package = PackageReader::parse_asset(&mut Cursor::new(buf))?;
    assert_eq!(package.categories.len(), 2);

    let model = package.category("model").expect("model category");
    assert_eq!(
        model.file("broken").map(|entry| entry.location.as_str()),
        Some("object/common/spring/spring_broken.xno")
    );
    assert!(package.category("sound").is_none());
    assert!(model.file("diffuse").is_none());
    Ok(())
}

#[test]
fn package_without_categories() -> Result<(), anyhow::Error> {
    let mut buf = Vec::new();
    Package::default().write(&mut buf)?;

    let package = PackageReader::parse_asset(&mut Cursor::new(buf))?;
    assert!(package.categories.is_empty());
    Ok(())
}

#[test]
fn empty_source_is_rejected() {
    let result = PackageReader::parse_asset(&mut Cursor::new(Vec::<u8>::new()));
    assert!(matches!(result, Err(ParserError::EmptySource)));
}

#[test]
fn wrong_version_is_rejected() -> Result<(), anyhow::Error> {
    let mut buf = Vec::new();
    write_version_chunk(&mut buf, b"PKGV", 7)?;

    let result = PackageReader::parse_asset(&mut Cursor::new(buf));
    assert!(matches!(
        result,
        Err(ParserError::UnsupportedVersion { version: 7, .. })
    ));
    Ok(())
}

#[test]
fn model_file_is_not_a_package() -> Result<(), anyhow::Error> {
    let mut buf = Vec::new();
    write_version_chunk(&mut buf, b"MDLV", 1)?;

    let result = PackageReader::parse_asset(&mut Cursor::new(buf));
    assert!(matches!(result, Err(ParserError::InvalidMagicValue { .. })));
    Ok(())
}

#[test]
fn truncated_category_is_an_error() -> Result<(), anyhow::Error> {
    let mut buf = Vec::new();
    write_version_chunk(&mut buf, b"PKGV", 1)?;
    // claims two entries but carries none
    let mut data = b"model\0".to_vec();
    data.extend_from_slice(&2u32.to_le_bytes());
    write_chunk(&mut buf, b"PCAT", &data)?;

    assert!(PackageReader::parse_asset(&mut Cursor::new(buf)).is_err());
    Ok(())
}

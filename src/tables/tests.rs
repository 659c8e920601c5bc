use placer_files::tables::reader::TablesReader;

use crate::tables::{PackageLocation, ReferenceTables};

#[test]
fn builtin_package_paths() {
    let tables = ReferenceTables::new();
    assert_eq!(
        tables.package_location("spring").map(PackageLocation::path),
        Some("object/common/spring.pkg".to_string())
    );
    // several types may share one package
    assert_eq!(
        tables.package_location("itemboxa"),
        tables.package_location("itembox")
    );
    assert!(tables.package_location("objectphysics").is_none());
}

#[test]
fn actor_parameter_index() {
    let tables = ReferenceTables::new().with_actor("objectphysics", &["flag", "objectName", "scale"]);
    assert_eq!(tables.actor_parameter_index("objectphysics", "objectName"), Some(1));
    assert_eq!(tables.actor_parameter_index("objectphysics", "power"), None);
    assert_eq!(tables.actor_parameter_index("pathobj", "objectName"), None);
}

#[test]
fn tables_from_file() -> Result<(), anyhow::Error> {
    let file = TablesReader::parse_str(
        r#"<ReferenceTables>
  <Physics><Entry name="Rock01" model="object/stage/rock/rock01.xno"/></Physics>
  <Paths><Entry name="Rail01" model="object/stage/rail/rail01.xno"/></Paths>
  <Actors><Actor type="pathobj"><Param name="objectName"/></Actor></Actors>
  <Packages><Package type="spring" group="stage" stem="spring_wvo"/></Packages>
</ReferenceTables>"#,
    )?;

    let tables = ReferenceTables::from_file(file);
    assert_eq!(tables.physics_model("Rock01"), Some("object/stage/rock/rock01.xno"));
    assert_eq!(tables.path_model("Rail01"), Some("object/stage/rail/rail01.xno"));
    assert_eq!(tables.physics_model("Rail01"), None);
    assert_eq!(tables.actor_parameter_index("pathobj", "objectName"), Some(0));
    assert_eq!(
        tables.package_location("spring"),
        Some(&PackageLocation::new("stage", "spring_wvo"))
    );
    // untouched built-ins survive
    assert!(tables.package_location("ring").is_some());
    Ok(())
}

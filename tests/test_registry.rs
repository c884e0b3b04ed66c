use fmu_coupling::{
    build_variable_names, CouplingRegistry, CouplingSettings, Mode, ModelSource, PayloadBuffer,
    ZoneRef,
};

fn settings(building_id: &str) -> CouplingSettings {
    CouplingSettings {
        building_id: building_id.into(),
        model_source: ModelSource::InputFile(format!("/models/{building_id}.idf").into()),
        weather_path: "/weather/site.epw".into(),
        dictionary_path: "/engine/data.idd".into(),
        library_root: "/library".into(),
    }
}

#[test_log::test]
fn allocate_then_drive_lifecycle() {
    let root = tempfile::tempdir().unwrap();
    let mut registry = CouplingRegistry::with_root(root.path());

    let index = registry
        .allocate(settings("campus.bldgA"), "Core_ZN", ZoneRef(0))
        .unwrap();
    assert_eq!(index, 0);

    let inst = registry.get_mut(index).unwrap();
    assert!(inst.temp_dir().is_dir());
    assert_eq!(inst.mode(), Mode::Instantiation);

    inst.set_mode(Mode::Initialization).unwrap();
    inst.set_mode(Mode::Event).unwrap();

    // Integration alternates between event and continuous-time phases.
    for _ in 0..3 {
        inst.set_mode(Mode::ContinuousTime).unwrap();
        inst.set_mode(Mode::Event).unwrap();
    }
    assert_eq!(inst.mode(), Mode::Event);

    // Going back to setup is not part of the lifecycle.
    assert!(inst.set_mode(Mode::Instantiation).is_err());
    assert_eq!(inst.mode(), Mode::Event);
}

#[test_log::test]
fn multiple_buildings_keep_stable_indices() {
    let root = tempfile::tempdir().unwrap();
    let mut registry = CouplingRegistry::with_root(root.path());

    let a = registry
        .allocate(settings("bldgA"), "Core_ZN", ZoneRef(0))
        .unwrap();
    let b = registry
        .allocate(settings("bldgB"), "Attic", ZoneRef(1))
        .unwrap();
    assert_eq!((a, b), (0, 1));

    // A second zone of building A arrives after building B was allocated.
    registry
        .get_mut(a)
        .unwrap()
        .push_zone("Perimeter_ZN_1", ZoneRef(2));

    assert_eq!(registry.get(a).unwrap().building_id(), "bldgA");
    assert_eq!(registry.get(b).unwrap().building_id(), "bldgB");
    assert_eq!(
        registry.get(a).unwrap().zone_names(),
        ["Core_ZN", "Perimeter_ZN_1"]
    );
    assert_eq!(registry.iter().count(), 2);
}

#[test_log::test]
fn variable_payload_round_trips_as_json() {
    let zone = "Core_ZN";
    let (short, qualified) = build_variable_names(zone, &["T", "QConSen_flow", "AFlo"]);
    assert_eq!(short, ["T", "QConSen_flow", "AFlo"]);
    assert_eq!(
        qualified,
        ["Core_ZN_T", "Core_ZN_QConSen_flow", "Core_ZN_AFlo"]
    );

    let mut payload = PayloadBuffer::with_capacity(64);
    payload.append_name_list(&qualified);
    let wrapped = format!("[\n{}\n]", payload.as_str());

    let parsed: Vec<serde_json::Value> = serde_json::from_str(&wrapped).unwrap();
    let names: Vec<&str> = parsed.iter().map(|v| v["name"].as_str().unwrap()).collect();
    assert_eq!(names, qualified);
}

#[test_log::test]
fn precompiled_unit_selects_its_own_path() {
    let root = tempfile::tempdir().unwrap();
    let mut registry = CouplingRegistry::with_root(root.path());

    let index = registry
        .allocate(
            CouplingSettings {
                model_source: ModelSource::Precompiled("/units/bldg.fmu".into()),
                ..settings("bldg")
            },
            "Core_ZN",
            ZoneRef(0),
        )
        .unwrap();

    let inst = registry.get(index).unwrap();
    assert!(inst.uses_precompiled());
    assert_eq!(inst.model_path(), std::path::Path::new("/units/bldg.fmu"));
}

use dto2mvc::{
    generate, generate_for, plan, AnnotatedType, EndpointDescriptor, GenerateError,
    GeneratorConfig, Method, Pivot, TypeCatalog,
};
use std::fs;
use std::path::Path;

mod models {
    use dto2mvc::Endpoints;

    #[derive(Endpoints)]
    #[endpoint(GET, "Cars", "Load")]
    #[endpoint(GET, "Cars", "Index")]
    #[endpoint(POST, "Cars", "Save")]
    pub struct Car;

    #[derive(Endpoints)]
    pub struct Wheel;

    #[derive(Endpoints)]
    #[endpoint(GET, "Bikes", "Index")]
    pub struct Bike;
}

mod duplicates {
    use dto2mvc::Endpoints;

    #[derive(Endpoints)]
    #[endpoint(GET, "Cars", "Load")]
    #[endpoint(GET, "Cars", "Load")]
    pub struct Twice;

    #[derive(Endpoints)]
    #[endpoint(GET, "Cars", "Load")]
    #[endpoint(POST, "Cars", "Load")]
    pub struct Clash;
}

mod broken {
    use dto2mvc::Endpoints;

    #[derive(Endpoints)]
    #[endpoint(GET, "Cars", "Load")]
    #[endpoint(PUT, "Cars", "Replace")]
    #[endpoint(POST, "Cars", "Save")]
    pub struct Car;
}

fn config() -> GeneratorConfig {
    GeneratorConfig::default().with_base_controller("Web.Controllers.MyControllerBase")
}

fn models_catalog() -> TypeCatalog {
    let mut catalog = TypeCatalog::new();
    catalog
        .register::<models::Car>()
        .register::<models::Wheel>()
        .register::<models::Bike>();
    catalog
}

/// Every file under `root`, relative and sorted, with its contents
fn snapshot(root: &Path) -> Vec<(String, String)> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<(String, String)>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .into_owned();
                out.push((rel, fs::read_to_string(&path).unwrap()));
            }
        }
    }
    let mut files = Vec::new();
    walk(root, root, &mut files);
    files.sort();
    files
}

#[test]
fn test_car_scenario_produces_six_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let mut catalog = TypeCatalog::new();
    catalog.register::<models::Car>();

    let written = generate(&catalog, &[Pivot::type_name("Car")], &out, &config()).unwrap();
    assert_eq!(written.len(), 6);

    let files: Vec<String> = snapshot(&out).into_iter().map(|(p, _)| p).collect();
    assert_eq!(
        files,
        vec![
            "Controllers/CarsController.Index.cs",
            "Controllers/CarsController.Load.cs",
            "Controllers/CarsController.Save.cs",
            "Views/Cars/Index.cshtml",
            "Views/Cars/Load.cshtml",
            "Views/Cars/Save.cshtml",
        ]
    );

    for (action, marker) in [("Load", "HttpGet"), ("Index", "HttpGet"), ("Save", "HttpPost")] {
        let controller =
            fs::read_to_string(out.join(format!("Controllers/CarsController.{action}.cs")))
                .unwrap();
        assert!(controller
            .contains("public partial class CarsController : Web.Controllers.MyControllerBase"));
        assert!(controller.contains(&format!("[{marker}]")));
        assert!(controller.contains(&format!("public ActionResult {action}()")));
        assert!(controller.contains("return new ViewResult();"));

        let view = fs::read_to_string(out.join(format!("Views/Cars/{action}.cshtml"))).unwrap();
        assert!(view.contains(&format!("public class {action}\n    {{\n    }}")));
    }
}

#[test]
fn test_module_pivot_covers_every_annotated_type() {
    let dir = tempfile::tempdir().unwrap();
    let written = generate(
        &models_catalog(),
        &[Pivot::of::<models::Wheel>()],
        dir.path(),
        &config(),
    )
    .unwrap();

    // Car: 3 descriptors, Wheel: none, Bike: 1
    assert_eq!(written.len(), 8);
    assert_eq!(
        written[6],
        dir.path().join("Controllers/BikesController.Index.cs")
    );
    assert_eq!(written[7], dir.path().join("Views/Bikes/Index.cshtml"));
    assert!(!dir.path().join("Views/Wheel").exists());
}

#[test]
fn test_overlapping_pivots_generate_each_type_once() {
    let catalog = models_catalog();
    let pivots = [
        Pivot::type_name("Car"),
        Pivot::of::<models::Bike>(),
        Pivot::type_name("Bike"),
    ];
    let planned = plan(&catalog, &pivots, Path::new("out"), &config()).unwrap();
    assert_eq!(planned.len(), 8);
}

#[test]
fn test_regeneration_is_deterministic_and_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = models_catalog();
    let pivots = catalog.all_modules();

    generate(&catalog, &pivots, dir.path(), &config()).unwrap();
    let first = snapshot(dir.path());
    generate(&catalog, &pivots, dir.path(), &config()).unwrap();
    let second = snapshot(dir.path());
    assert_eq!(first, second);

    let other = tempfile::tempdir().unwrap();
    generate(&catalog, &pivots, other.path(), &config()).unwrap();
    assert_eq!(first, snapshot(other.path()));
}

#[test]
fn test_duplicate_descriptors_are_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = TypeCatalog::new();
    catalog.register::<duplicates::Twice>();

    let written =
        generate(&catalog, &[Pivot::type_name("Twice")], dir.path(), &config()).unwrap();
    assert_eq!(written.len(), 4);
    assert_eq!(written[0], written[2]);
    assert_eq!(written[1], written[3]);
    assert_eq!(snapshot(dir.path()).len(), 2);
}

#[test]
fn test_colliding_descriptors_last_write_wins() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = TypeCatalog::new();
    catalog.register::<duplicates::Clash>();

    generate(&catalog, &[Pivot::type_name("Clash")], dir.path(), &config()).unwrap();
    let controller =
        fs::read_to_string(dir.path().join("Controllers/CarsController.Load.cs")).unwrap();
    assert!(controller.contains("[HttpPost]"));
    assert!(!controller.contains("[HttpGet]"));
}

#[test]
fn test_unsupported_verb_stops_run_and_keeps_earlier_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = TypeCatalog::new();
    catalog.register::<broken::Car>();

    let err = generate(
        &catalog,
        &[Pivot::of::<broken::Car>()],
        dir.path(),
        &config(),
    )
    .unwrap_err();
    match err {
        GenerateError::UnsupportedVerb { verb, action, .. } => {
            assert_eq!(verb, Method::PUT);
            assert_eq!(action, "Replace");
        }
        other => panic!("expected UnsupportedVerb, got {other:?}"),
    }

    assert!(dir.path().join("Controllers/CarsController.Load.cs").is_file());
    assert!(dir.path().join("Views/Cars/Load.cshtml").is_file());
    assert!(!dir.path().join("Controllers/CarsController.Replace.cs").exists());
    assert!(!dir.path().join("Views/Cars/Replace.cshtml").exists());
    assert!(!dir.path().join("Controllers/CarsController.Save.cs").exists());
    assert!(!dir.path().join("Views/Cars/Save.cshtml").exists());
}

#[test]
fn test_removed_descriptor_leaves_stale_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut before = TypeCatalog::new();
    before.register::<models::Car>();
    generate(&before, &before.all_modules(), dir.path(), &config()).unwrap();

    let mut after = TypeCatalog::new();
    after.insert(AnnotatedType::new(
        "generator_tests::models",
        "Car",
        vec![EndpointDescriptor::new(Method::GET, "Cars", "Load")],
    ));
    let written = generate(&after, &after.all_modules(), dir.path(), &config()).unwrap();
    assert_eq!(written.len(), 2);

    assert!(dir.path().join("Controllers/CarsController.Save.cs").is_file());
    assert!(dir.path().join("Views/Cars/Index.cshtml").is_file());
}

#[test]
fn test_output_root_that_is_a_file_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("out");
    fs::write(&blocker, "not a directory").unwrap();

    let err = generate(
        &models_catalog(),
        &[Pivot::type_name("Car")],
        &blocker,
        &config(),
    )
    .unwrap_err();
    match err {
        GenerateError::Io { path, .. } => assert!(path.starts_with(&blocker)),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn test_unknown_type_pivot() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let err = generate(
        &models_catalog(),
        &[Pivot::type_name("Plane")],
        &out,
        &config(),
    )
    .unwrap_err();
    assert!(matches!(err, GenerateError::UnknownPivot { ref pivot } if pivot == "Plane"));
    assert!(!out.exists());
}

#[test]
fn test_generate_for_single_type() {
    let dir = tempfile::tempdir().unwrap();
    let written = generate_for::<models::Bike>(dir.path(), &config()).unwrap();
    // only Bike is registered, so Car in the same module is not generated
    assert_eq!(written.len(), 2);
    assert!(dir
        .path()
        .join("Controllers/BikesController.Index.cs")
        .is_file());
    assert!(!dir.path().join("Views/Cars").exists());
}

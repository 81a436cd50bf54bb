//! The sample schema shipped in `resources/` must always generate cleanly.

use std::path::Path;

use quill::codegen::{render_unit, GeneratorOptions};
use quill::ir::ApiModel;
use quill::pipeline::{check, run, GenerationContext};

fn sample_schema() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/api.json"))
}

#[test]
fn sample_schema_loads() {
    let model = ApiModel::from_file(sample_schema()).expect("sample schema loads");
    assert!(model.is_declared_type("Message"));
    assert!(model.get_method("sendMessage").is_some());
    let names: Vec<&str> = model.types().map(|(name, _)| name).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn sample_schema_generates_and_checks() {
    let out = tempfile::tempdir().expect("Failed to create temporary directory");
    let context = GenerationContext::builder()
        .schema_path(sample_schema())
        .output_dir(out.path())
        .options(GeneratorOptions::default())
        .build()
        .expect("context builds");

    let written = run(&context).expect("sample generates");
    assert_eq!(written.len(), 2);
    assert!(check(&context).expect("check runs").is_fresh());

    let types = std::fs::read_to_string(&written[0]).expect("types written");
    assert!(types.contains("pub photos: Vec<Vec<PhotoSize>>,"));
    assert!(types.contains("pub from: Option<Box<User>>,"));
    assert!(types.contains("pub struct InputFile {}"));

    let methods = std::fs::read_to_string(&written[1]).expect("methods written");
    assert!(methods.contains("pub struct SetWebhookOpts {"));
    assert!(methods.contains("pub certificate: InputFile,"));
    assert!(!methods.contains("\"certificate\""));
    assert!(methods.contains("pub async fn get_user_profile_photos("));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let model = ApiModel::from_file(sample_schema()).expect("sample schema loads");
    let render = || {
        quill::codegen::generate_units(&model, &GeneratorOptions::default())
            .expect("generation succeeds")
            .iter()
            .map(|unit| render_unit(unit).expect("unit renders"))
            .collect::<Vec<_>>()
    };
    assert_eq!(render(), render());
}

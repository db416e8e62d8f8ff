//! Generate command for printing struct declarations.

use anyhow::{Context, Result};
use memclass_core::{GeneratorKind, MemclassConfig, ProjectData, generate};

use crate::cli_utils::FieldSpec;

pub fn run(
    config: &MemclassConfig,
    name: &str,
    kind: GeneratorKind,
    fields: &[FieldSpec],
) -> Result<()> {
    print!("{}", render(config, name, kind, fields)?);
    Ok(())
}

pub fn render(
    config: &MemclassConfig,
    name: &str,
    kind: GeneratorKind,
    fields: &[FieldSpec],
) -> Result<String> {
    let mut project = ProjectData::with_config(config);
    let class = project.new_class(name);
    for spec in fields {
        spec.apply(class);
    }
    let uuid = class.uuid();

    let class = project
        .get_class(&uuid)
        .context("Generated class disappeared from project")?;
    let mut generator = kind.generator();
    Ok(generate([class], generator.as_mut(), config.pointer_width))
}

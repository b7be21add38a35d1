use dtogen_core::datamodel_json_schema;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schema = datamodel_json_schema()?;
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{json}");
    Ok(())
}

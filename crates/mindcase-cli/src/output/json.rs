use anyhow::Result;
use mindcase_core::CaseRecord;

pub fn print_records_json(records: &[CaseRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    println!("{json}");
    Ok(())
}

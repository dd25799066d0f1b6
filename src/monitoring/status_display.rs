use crate::shared_data::StatusRecord;

fn green_secs(secs: Option<u64>) -> String {
    match secs {
        Some(s) => format!("{}s", s),
        None => "-".to_string(),
    }
}

/// Renders one status block for the console.
pub fn render_status(record: &StatusRecord) -> String {
    let mut out = String::new();
    out.push_str("--- Traffic Light Status ---\n");
    out.push_str(&format!("Phase: {}\n", record.phase));
    out.push_str(&format!(
        "North: {}\tSouth: {}\n",
        record.north, record.south
    ));
    out.push_str(&format!("East:  {}\tWest:  {}\n", record.east, record.west));
    out.push_str(&format!(
        "Timing: N/S:{}, E/W:{}\n",
        green_secs(record.ns_green_secs),
        green_secs(record.ew_green_secs)
    ));
    out.push_str(&format!(
        "Vehicles: N:{} S:{} E:{} W:{}\n",
        record.north_present as u8,
        record.south_present as u8,
        record.east_present as u8,
        record.west_present as u8
    ));
    out.push_str(&format!(
        "Emergency Mode: {}\n",
        if record.emergency { "ON" } else { "OFF" }
    ));
    out.push_str("---------------------------");
    out
}

pub fn print_status(record: &StatusRecord) {
    println!("\n{}", render_status(record));
}

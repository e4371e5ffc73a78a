use colored::Colorize;

use crate::constants::REGIONS;
use crate::output;

pub fn list() {
    if output::is_json_output() {
        println!("{}", serde_json::to_string_pretty(REGIONS).unwrap_or_default());
        return;
    }

    for region in REGIONS {
        println!("{}", region.cyan());
    }
}

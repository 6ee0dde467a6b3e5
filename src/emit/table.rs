//! Packed weather id table emitter.
//!
//! Renders the GAS source for `gMapWeatherIds`: one `.byte` triple per
//! association in grouped order, referencing the map and weather id macros
//! symbolically so the assembler resolves the packed coordinates. The
//! stream always ends with the `0xFF, 0xFF, 0x00` terminator the runtime
//! scans for, even when there are no associations at all.

use std::path::Path;

use crate::grouper::ClusterGroup;

/// Render the table artifact. `include_path` is the declaration include
/// that defines the `WEATHER_ID_*` macros the `.byte` lines reference.
pub fn render_table(groups: &[ClusterGroup], include_path: &Path) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("    .section .rodata".to_string());
    lines.push("    .align 2".to_string());
    lines.push(String::new());
    lines.push(format!("    .include \"{}\"", include_path.display()));
    lines.push(String::new());
    lines.push("    .global gMapWeatherIds".to_string());
    lines.push("gMapWeatherIds:".to_string());
    lines.push(String::new());

    let mut current_region: Option<char> = None;
    for group in groups {
        if current_region != Some(group.region_letter) {
            current_region = Some(group.region_letter);
            lines.push(format!(
                "    @ ================= Region {} =================",
                group.region_letter
            ));
        }
        lines.push(format!("    @ Cluster {}", group.cluster_id));
        for assoc in &group.members {
            lines.push(format!(
                "    .byte ({map} >> 8), ({map} & 0xFF), {weather}",
                map = assoc.map_id,
                weather = assoc.weather_id
            ));
        }
        lines.push(String::new());
    }

    lines.push(String::new());
    // Terminator record: mapGroup = 0xFF, mapNum = 0xFF, weatherId = 0x00.
    lines.push("    .byte 0xFF, 0xFF, 0x00".to_string());
    lines.push(String::new());

    lines.join("\n")
}

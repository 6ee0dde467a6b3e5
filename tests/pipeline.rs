//! End-to-end pipeline tests over real files in a temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use weather_gen::{run, DiagnosticCode, GenConfig, GenError, RunSummary};

struct Fixture {
    _dir: TempDir,
    cfg: GenConfig,
}

impl Fixture {
    fn new(declarations: &str, catalog: &str, tables: Option<&str>) -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::write(root.join("weather_ids.inc"), declarations).unwrap();
        fs::write(root.join("map_groups.h"), catalog).unwrap();
        if let Some(tables) = tables {
            fs::write(root.join("weather_tables.inc"), tables).unwrap();
        }

        let cfg = GenConfig {
            declarations: root.join("weather_ids.inc"),
            catalog: root.join("map_groups.h"),
            tables: root.join("weather_tables.inc"),
            out_table: root.join("out/weather_ids.s"),
            out_report: root.join("out/weather_report.txt"),
        };
        Self { _dir: dir, cfg }
    }

    fn run(&self) -> RunSummary {
        run(&self.cfg).unwrap()
    }

    fn table(&self) -> String {
        fs::read_to_string(&self.cfg.out_table).unwrap()
    }

    fn report(&self) -> String {
        fs::read_to_string(&self.cfg.out_report).unwrap()
    }
}

const GOOD_DECLARATIONS: &str = "#define WEATHER_ID_ROUTE28              Y0\n";
const GOOD_CATALOG: &str = "#define MAP_ROUTE28 (13 | (43 << 8))\n";
const GOOD_TABLES: &str = "WeatherTable_Y0:\n\t.2byte 0x0001\n";

#[test]
fn test_consistent_inputs_yield_clean_run() {
    let fx = Fixture::new(GOOD_DECLARATIONS, GOOD_CATALOG, Some(GOOD_TABLES));
    let summary = fx.run();

    assert_eq!(summary.association_count, 1);
    assert_eq!(summary.cluster_count, 1);
    assert_eq!(summary.diagnostic_count(), 0);

    let table = fx.table();
    assert!(table.contains("    @ ================= Region Y ================="));
    assert!(table.contains("    @ Cluster Y0"));
    assert!(table
        .contains("    .byte (MAP_ROUTE28 >> 8), (MAP_ROUTE28 & 0xFF), WEATHER_ID_ROUTE28"));
    assert!(table.ends_with("    .byte 0xFF, 0xFF, 0x00\n"));

    let report = fx.report();
    assert!(report.contains("Cluster Y0:"));
    assert!(report.contains("  MAP_ROUTE28  (group=43, num=13)  <- WEATHER_ID_ROUTE28"));
    assert!(report.contains("Warnings:\n---------\nNone.\n"));
}

#[test]
fn test_byte_identical_artifacts_across_runs() {
    let fx = Fixture::new(
        "\
#define WEATHER_ID_ROUTE28 Y0
#define WEATHER_ID_CAVE1 X3
#define WEATHER_ID_CAVE2 X3
#define WEATHER_ID_TOWN B1
",
        "\
#define MAP_ROUTE28 (13 | (43 << 8))
#define MAP_CAVE1 (0 | (7 << 8))
#define MAP_CAVE2 (1 | (7 << 8))
#define MAP_TOWN (2 | (9 << 8))
",
        Some("WeatherTable_Y0:\nWeatherTable_X3:\nWeatherTable_B1:\n"),
    );

    fx.run();
    let table_a = fx.table();
    let report_a = fx.report();
    fx.run();
    assert_eq!(table_a, fx.table());
    assert_eq!(report_a, fx.report());
}

#[test]
fn test_cluster_and_member_ordering() {
    let fx = Fixture::new(
        "\
#define WEATHER_ID_ZULU Y1
#define WEATHER_ID_ALPHA Y1
#define WEATHER_ID_LONE X9
#define WEATHER_ID_EARLY X0
",
        "\
#define MAP_ZULU (0 | (1 << 8))
#define MAP_ALPHA (1 | (1 << 8))
#define MAP_LONE (2 | (1 << 8))
#define MAP_EARLY (3 | (1 << 8))
",
        Some("WeatherTable_Y1:\nWeatherTable_X9:\nWeatherTable_X0:\n"),
    );
    fx.run();

    let table = fx.table();
    let markers: Vec<&str> = table
        .lines()
        .map(str::trim_start)
        .filter(|l| l.starts_with("@ Cluster") || l.starts_with(".byte ("))
        .collect();
    assert_eq!(
        markers,
        vec![
            "@ Cluster X0",
            ".byte (MAP_EARLY >> 8), (MAP_EARLY & 0xFF), WEATHER_ID_EARLY",
            "@ Cluster X9",
            ".byte (MAP_LONE >> 8), (MAP_LONE & 0xFF), WEATHER_ID_LONE",
            "@ Cluster Y1",
            ".byte (MAP_ALPHA >> 8), (MAP_ALPHA & 0xFF), WEATHER_ID_ALPHA",
            ".byte (MAP_ZULU >> 8), (MAP_ZULU & 0xFF), WEATHER_ID_ZULU",
        ]
    );
}

#[test]
fn test_unknown_map_renders_question_marks_and_one_diagnostic() {
    let fx = Fixture::new(
        "#define WEATHER_ID_PHANTOM X0\n#define WEATHER_ID_ROUTE28 Y0\n",
        GOOD_CATALOG,
        Some("WeatherTable_X0:\nWeatherTable_Y0:\n"),
    );
    let summary = fx.run();

    let unknown: Vec<_> = summary
        .diagnostics
        .entries()
        .iter()
        .filter(|d| d.code == DiagnosticCode::UnknownMap)
        .collect();
    assert_eq!(unknown.len(), 1);
    assert!(unknown[0].message.starts_with("MAP_PHANTOM (from WEATHER_ID_PHANTOM)"));

    let report = fx.report();
    assert!(report.contains("  MAP_PHANTOM  (group=?, num=?)  <- WEATHER_ID_PHANTOM"));
    // The diagnostic also lands verbatim in the warnings section.
    assert!(report.contains("- MAP_PHANTOM (from WEATHER_ID_PHANTOM) does not exist in"));
}

#[test]
fn test_orphaned_and_missing_tables_each_diagnosed_once() {
    let fx = Fixture::new(
        GOOD_DECLARATIONS,
        GOOD_CATALOG,
        // Y0 is used but has no table; Z5 has a table but no maps.
        Some("WeatherTable_Z5:\n"),
    );
    let summary = fx.run();

    let codes: Vec<DiagnosticCode> = summary
        .diagnostics
        .entries()
        .iter()
        .map(|d| d.code)
        .collect();
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::UnusedCluster,
            DiagnosticCode::MissingClusterTable
        ]
    );
}

#[test]
fn test_catalog_map_without_declaration_diagnosed() {
    let fx = Fixture::new(
        GOOD_DECLARATIONS,
        "#define MAP_ROUTE28 (13 | (43 << 8))\n#define MAP_FOO (0 | (1 << 8))\n",
        Some(GOOD_TABLES),
    );
    let summary = fx.run();

    assert_eq!(summary.diagnostic_count(), 1);
    let entry = &summary.diagnostics.entries()[0];
    assert_eq!(entry.code, DiagnosticCode::MapWithoutWeather);
    assert!(entry.message.starts_with("MAP_FOO exists in"));
}

#[test]
fn test_absent_table_source_degrades_but_completes() {
    let fx = Fixture::new(GOOD_DECLARATIONS, GOOD_CATALOG, None);
    let summary = fx.run();

    // One diagnostic about the missing table source; no cluster checks ran.
    assert_eq!(summary.diagnostic_count(), 1);
    assert_eq!(
        summary.diagnostics.entries()[0].code,
        DiagnosticCode::MissingTableSource
    );
    assert!(fx.cfg.out_table.is_file());
    assert!(fx.cfg.out_report.is_file());
}

#[test]
fn test_empty_declarations_still_emit_terminated_table() {
    let fx = Fixture::new("// no weather ids yet\n", GOOD_CATALOG, Some(GOOD_TABLES));
    let summary = fx.run();

    assert_eq!(summary.association_count, 0);
    let table = fx.table();
    let records: Vec<&str> = table
        .lines()
        .filter(|l| l.trim_start().starts_with(".byte"))
        .collect();
    assert_eq!(records, vec!["    .byte 0xFF, 0xFF, 0x00"]);
}

#[test]
fn test_missing_mandatory_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let root: &Path = dir.path();
    fs::write(root.join("map_groups.h"), GOOD_CATALOG).unwrap();

    let cfg = GenConfig {
        declarations: root.join("does_not_exist.inc"),
        catalog: root.join("map_groups.h"),
        tables: root.join("weather_tables.inc"),
        out_table: root.join("out.s"),
        out_report: root.join("report.txt"),
    };

    let err = run(&cfg).unwrap_err();
    assert!(matches!(err, GenError::MissingInput { .. }));
    // Fatal before any output is produced.
    assert!(!cfg.out_table.exists());
    assert!(!cfg.out_report.exists());
}

#[test]
fn test_duplicate_declarations_kept_in_both_artifacts() {
    let fx = Fixture::new(
        "#define WEATHER_ID_ROUTE28 Y0\n#define WEATHER_ID_ROUTE28 Y0\n",
        GOOD_CATALOG,
        Some(GOOD_TABLES),
    );
    let summary = fx.run();

    assert_eq!(summary.association_count, 2);
    let duplicate_codes: Vec<DiagnosticCode> = summary
        .diagnostics
        .entries()
        .iter()
        .map(|d| d.code)
        .collect();
    assert_eq!(
        duplicate_codes,
        vec![
            DiagnosticCode::DuplicateWeatherId,
            DiagnosticCode::DuplicateMapEntry
        ]
    );

    let record = "    .byte (MAP_ROUTE28 >> 8), (MAP_ROUTE28 & 0xFF), WEATHER_ID_ROUTE28";
    let occurrences = fx.table().lines().filter(|l| *l == record).count();
    assert_eq!(occurrences, 2);
}

#[test]
fn test_report_header_names_invocation_paths() {
    let fx = Fixture::new(GOOD_DECLARATIONS, GOOD_CATALOG, Some(GOOD_TABLES));
    fx.run();

    let report = fx.report();
    let expect = |prefix: &str, path: &PathBuf| {
        assert!(
            report.contains(&format!("{prefix}{}", path.display())),
            "missing '{prefix}' line for {}",
            path.display()
        );
    };
    expect("Source: ", &fx.cfg.declarations);
    expect("Map groups: ", &fx.cfg.catalog);
    expect("Weather tables: ", &fx.cfg.tables);
}

use rand::SeedableRng;
use rand::rngs::StdRng;

use wrtdump_core::{Format, FormatMask, HARDWARE_TYPE_KEY, Nvram, Variables};

fn sample_store() -> Variables {
    let mut variables = Variables::new();
    variables.set("wan_proto", b"dhcp".to_vec()).unwrap();
    variables.set("wl_ssid", b"attic net".to_vec()).unwrap();
    variables
        .set("lan_ipaddr", b"192.168.1.1".to_vec())
        .unwrap();
    variables.set("wl_channel", b"11".to_vec()).unwrap();
    variables.set("empty", b"".to_vec()).unwrap();
    variables
}

fn sorted_entries(variables: &Variables) -> Vec<(String, Vec<u8>)> {
    let mut entries: Vec<(String, Vec<u8>)> = variables
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_vec()))
        .collect();
    entries.sort();
    entries
}

fn round_trip(format: Format, variables: Variables) -> Variables {
    let mut nvram = Nvram::new();
    nvram.variables = variables;
    nvram.format = Some(format);

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let buffer = nvram.to_bytes_with(&mut rng).unwrap();

    let reloaded = Nvram::from_bytes(&buffer, format.mask()).unwrap();
    assert_eq!(reloaded.format, Some(format));
    reloaded.variables
}

#[test]
fn asuswrt1_round_trip_preserves_order() {
    let variables = sample_store();
    assert_eq!(round_trip(Format::AsuswrtV1, variables.clone()), variables);
}

#[test]
fn asuswrt2_round_trip_preserves_order() {
    let variables = sample_store();
    assert_eq!(round_trip(Format::AsuswrtV2, variables.clone()), variables);
}

#[test]
fn tomato_round_trip_includes_hardware_type() {
    let mut variables = sample_store();
    variables
        .set(HARDWARE_TYPE_KEY, b"305419896".to_vec())
        .unwrap();

    let reloaded = round_trip(Format::Tomato, variables.clone());
    assert_eq!(sorted_entries(&reloaded), sorted_entries(&variables));
    assert_eq!(reloaded.get(HARDWARE_TYPE_KEY), Some(&b"305419896"[..]));
}

#[test]
fn ddwrt_round_trip_regroups_but_keeps_the_set() {
    let variables = sample_store();
    let reloaded = round_trip(Format::DdWrt, variables.clone());
    assert_eq!(sorted_entries(&reloaded), sorted_entries(&variables));

    // Wireless keys come back first, stable within each group.
    let keys: Vec<&str> = reloaded.iter().map(|(key, _)| key).collect();
    assert_eq!(
        keys,
        ["wl_ssid", "wl_channel", "wan_proto", "lan_ipaddr", "empty"]
    );
}

#[test]
fn text_round_trip_with_binary_values() {
    let mut variables = sample_store();
    variables
        .set("blob", vec![0x00, 0x07, 0x1F, b'\\', b'\n'])
        .unwrap();

    let reloaded = round_trip(Format::Text, variables.clone());
    assert_eq!(sorted_entries(&reloaded), sorted_entries(&variables));
}

#[test]
fn detection_prefers_declared_binary_format_over_text() {
    // An Asuswrt V1 buffer stays V1 even with the text candidate enabled.
    let mut nvram = Nvram::new();
    nvram.variables = sample_store();
    nvram.format = Some(Format::AsuswrtV1);
    let buffer = nvram.to_bytes().unwrap();

    let reloaded = Nvram::from_bytes(&buffer, FormatMask::all()).unwrap();
    assert_eq!(reloaded.format, Some(Format::AsuswrtV1));
}

#[test]
fn detection_respects_the_candidate_mask() {
    let mut nvram = Nvram::new();
    nvram.variables = sample_store();
    nvram.format = Some(Format::AsuswrtV1);
    let buffer = nvram.to_bytes().unwrap();

    let err = Nvram::from_bytes(&buffer, FormatMask::DD_WRT | FormatMask::TOMATO).unwrap_err();
    assert_eq!(err.to_string(), "unrecognized format");
}

#[test]
fn save_and_load_files() {
    let dir = std::env::temp_dir();
    let unique = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = dir.join(format!("wrtdump_roundtrip_{unique}.bin"));

    let mut nvram = Nvram::new();
    nvram.variables = sample_store();
    nvram.format = Some(Format::AsuswrtV1);
    nvram.save(&path).unwrap();
    assert_eq!(nvram.path(), Some(path.as_path()));

    let reloaded = Nvram::load(&path, FormatMask::all()).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(reloaded.format, Some(Format::AsuswrtV1));
    assert_eq!(reloaded.variables, nvram.variables);
    assert_eq!(reloaded.path(), Some(path.as_path()));
}

use flexconf::devices::*;

fn labeled(raw: &[&str], backend: &str) -> Vec<DeviceEntry> {
    DeviceLabeler::label(raw.iter().copied(), &Backend::parse(backend), Direction::Input)
}

#[test]
fn test_mme_splits_at_first_parenthesis() {
    let list = labeled(
        &["Microphone (USB Audio CODEC)", "Line 1 (Virtual Audio Cable) (2)"],
        "MME",
    );

    assert_eq!(list[1].label, "Line 1");
    assert_eq!(list[1].device, "Virtual Audio Cable");
    assert_eq!(list[2].label, "Microphone");
    assert_eq!(list[2].device, "USB Audio CODEC");
}

#[test]
fn test_bluetooth_device_is_always_bluetooth() {
    let raw = [
        "Headset (@System32\\drivers\\bthhfenum.sys,#2;%1 Hands-Free%0\r\n;(WH-1000XM4))",
        "Headphones (@System32\\drivers\\bthhfenum.sys,#4;%1 Stereo%0\r\n;(Buds Pro))",
    ];
    let list = labeled(&raw, "Windows WASAPI");

    for entry in &list[1..] {
        assert_eq!(entry.device, BLUETOOTH_DEVICE);
    }
    assert_eq!(list[1].label, "Buds Pro");
    assert_eq!(list[2].label, "WH-1000XM4");
}

#[test]
fn test_nested_parentheses_stay_in_device() {
    let list = labeled(&["Speakers (Realtek(R) Audio)"], "Windows DirectSound");
    assert_eq!(list[1].label, "Speakers");
    assert_eq!(list[1].device, "Realtek(R) Audio");
}

#[test]
fn test_bluetooth_and_general_names_sort_together() {
    let raw = [
        "Microphone (Realtek High Definition Audio)",
        "Headset Microphone (@System32\\drivers\\bthhfenum.sys,#2;(My Earbuds))",
    ];
    let list = labeled(&raw, "Windows WASAPI");

    assert_eq!(list[1].label, "Microphone");
    assert_eq!(list[1].device, "Realtek High Definition Audio");
    assert_eq!(list[2].label, "My Earbuds");
    assert_eq!(list[2].device, "Bluetooth");
}

#[test]
fn test_loopback_entries_get_highest_values() {
    let raw = [
        "Aardvark Speakers (USB) [Loopback]",
        "Zoom Mic (USB)",
        "Speakers (Realtek(R) Audio) [Loopback]",
        "Microphone (Realtek(R) Audio)",
    ];
    let list = labeled(&raw, "WASAPI");

    let max_regular = list[1..]
        .iter()
        .filter(|e| !e.is_loopback())
        .map(|e| e.value)
        .max()
        .unwrap();
    let min_loopback = list[1..]
        .iter()
        .filter(|e| e.is_loopback())
        .map(|e| e.value)
        .min()
        .unwrap();

    assert!(max_regular < min_loopback);
    assert_eq!(list[3].label, "[Loopback] Aardvark Speakers");
    assert_eq!(list[4].label, "[Loopback] Speakers");
}

#[test]
fn test_none_row_is_always_first() {
    for raw in [vec![], vec!["Speakers (Realtek(R) Audio)"], vec!["a", "b", "c"]] {
        let list = labeled(&raw, "WASAPI");
        assert_eq!(list.len(), raw.len() + 1);
        assert_eq!(list[0], DeviceEntry::none());

        let values: Vec<i32> = list.iter().map(|e| e.value).collect();
        let expected: Vec<i32> = (-1..raw.len() as i32).collect();
        assert_eq!(values, expected);
    }
}

#[test]
fn test_relabeling_keeps_order() {
    let raw = [
        "Speakers (Realtek(R) Audio)",
        "Headphones (USB Audio)",
        "Speakers (Realtek(R) Audio) [Loopback]",
        "Digital Output (Realtek(R) Audio)",
        "Élan Mic (USB)",
    ];
    let first = labeled(&raw, "WASAPI");
    let labels: Vec<&str> = first[1..].iter().map(|e| e.label.as_str()).collect();

    let second = labeled(&labels, "unknown");
    let relabeled: Vec<&str> = second[1..].iter().map(|e| e.name.as_str()).collect();

    assert_eq!(labels, relabeled);
}

#[test]
fn test_verbatim_names_keep_raw_string() {
    let list = labeled(&["Primary Sound Capture Driver"], "Windows DirectSound");
    assert_eq!(list[1].label, "Primary Sound Capture Driver");
    assert_eq!(list[1].name, "Primary Sound Capture Driver");
    assert_eq!(list[1].device, "");
}

use flexconf::config::{Config, DEFAULT_CONFIG_TOML};
use flexconf::devices::{Backend, DeviceCatalog, DeviceEntry, HostDevice, StaticEnumerator};
use flexconf::system::WindowsVersion;
use flexconf::{adjust_brightness, ConfigDiffer};

fn print_list(title: &str, entries: &[DeviceEntry]) {
    println!("{}:", title);
    for entry in entries {
        if entry.device.is_empty() {
            println!("  [{:>2}] {}", entry.value, entry.label);
        } else {
            println!("  [{:>2}] {}  ({})", entry.value, entry.label, entry.device);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("FlexASIO configuration core demo");
    println!("================================\n");

    let enumerator = StaticEnumerator::new().with_devices(
        Backend::Wasapi,
        vec![
            HostDevice::new("Microphone (USB Audio CODEC)", 1, 0),
            HostDevice::new("Speakers (Realtek(R) Audio)", 0, 2),
            HostDevice::new(
                "Headset (@System32\\drivers\\bthhfenum.sys,#2;%1 Hands-Free%0\r\n;(WH-1000XM4))",
                1,
                1,
            ),
            HostDevice::new("Line In (Rear) (Realtek(R) Audio)", 2, 0),
        ],
    );
    let catalog = DeviceCatalog::new(enumerator);

    for backend in [Backend::Wasapi, Backend::Mme] {
        println!("--- Backend {} ---", backend.host_api_name());
        let lists = catalog.refresh(&backend).await;
        print_list("Inputs", &lists.input);
        print_list("Outputs", &lists.output);
        println!();
    }

    let saved = Config::from_toml_str(DEFAULT_CONFIG_TOML)?;
    let mut edited = saved.clone();
    if let Some(input) = edited.input.as_mut() {
        input.device = Some("Microphone (USB Audio CODEC)".to_string());
        input.suggested_latency_seconds = Some(0.04);
    }

    println!("--- Config ---");
    println!("Unchanged: {}", ConfigDiffer::equal(Some(&edited), Some(&saved)));
    println!("{}\n", edited.to_toml_string()?);

    let accent = "rgb(0, 120, 212)";
    println!("--- Appearance ---");
    println!("Accent {} -> {}", accent, adjust_brightness(accent, 70.0, None)?);
    let version = WindowsVersion::from((10, 0, 22631));
    println!("Mica backdrop available: {}", version.supports_mica());

    Ok(())
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `shared_attr_core` linkage without a host application.
//! - Run the shared `count` scenario and print each access path.

use log::info;
use shared_attr_core::{
    init_logging, shared_attributes, AttrResult, LoggingConfig, SharedAttributes,
};

struct Counter;

shared_attributes! {
    type Counter {
        declare_accessors("count", "count=");
    }
}

fn main() {
    println!("shared_attr_core version={}", shared_attr_core::core_version());

    if let Some(config) = LoggingConfig::from_env() {
        if let Err(err) = init_logging(&config) {
            eprintln!("logging disabled: {err}");
        }
    }

    if let Err(err) = run_count_scenario() {
        eprintln!("count scenario failed: {err}");
        std::process::exit(1);
    }
}

fn run_count_scenario() -> AttrResult<()> {
    let first = Counter;
    let second = Counter;

    Counter::write_shared("count", 10)?;
    println!("type count={}", Counter::read_shared("count")?);
    println!("instance count={}", first.shared("count")?);

    second.set_shared("count", 29)?;
    println!("type count={}", Counter::read_shared("count")?);
    println!("instance count={}", first.shared("count")?);

    let snapshot = serde_json::to_string(&Counter::attr_table().snapshot())
        .unwrap_or_else(|err| format!("<unserializable: {err}>"));
    info!("event=cli_scenario module=cli status=ok snapshot_bytes={}", snapshot.len());
    println!("snapshot={snapshot}");
    Ok(())
}

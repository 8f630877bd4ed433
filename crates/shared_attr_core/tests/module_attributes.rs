use once_cell::sync::Lazy;
use serde_json::{json, Value};
use shared_attr_core::{shared_attributes, OwnerKind, SharedAttributes, SlotTable};

static CONFIGURABLE: Lazy<SlotTable> = Lazy::new(|| {
    let module = SlotTable::for_module("Configurable");
    module
        .declare_shared_accessors(&["retries=", "timeout", "timeout="])
        .expect("shared accessors declare");
    module
        .declare_accessors(&["internal", "internal="])
        .expect("strict accessors declare");
    module
});

struct Client;
struct Server;

shared_attributes! {
    type Client: incorporates [&CONFIGURABLE] {}
}

shared_attributes! {
    type Server: incorporates [&CONFIGURABLE] {
        declare_accessors("port", "port=");
    }
}

struct Tagged;
struct Plain;

shared_attributes! {
    module Tagged as "Taggable" {
        declare_shared_accessors("tag=");
    }
}

shared_attributes! {
    type Plain: incorporates [Tagged::attr_table()] {}
}

#[test]
fn shared_declaration_pairs_writer_only_names_with_readers() {
    let module = SlotTable::for_module("Symmetric");
    let generated = module.declare_shared_accessors(&["x="]).unwrap();

    assert_eq!(generated.len(), 2);
    assert!(module.has_reader("x"));
    assert!(module.has_writer("x"));
    assert_eq!(module.read("x").unwrap(), Value::Null);
}

#[test]
fn incorporating_types_share_one_module_slot() {
    let client = Client;
    let server = Server;

    Client::write_shared("retries", 3).unwrap();
    assert_eq!(Server::read_shared("retries").unwrap(), json!(3));
    assert_eq!(server.shared("retries").unwrap(), json!(3));

    server.set_shared("retries", 5).unwrap();
    assert_eq!(client.shared("retries").unwrap(), json!(5));
    assert_eq!(CONFIGURABLE.read("retries").unwrap(), json!(5));

    assert!(!Client::attr_table().has_slot("retries"));
    assert!(!Server::attr_table().has_slot("retries"));
}

#[test]
fn incorporated_handles_point_at_module_storage() {
    let through_client = Client::attr_table().reader("timeout").unwrap();
    let through_server = Server::attr_table().reader("timeout").unwrap();
    let direct = CONFIGURABLE.reader("timeout").unwrap();

    assert!(through_client.same_slot(&through_server));
    assert!(through_client.same_slot(&direct));
}

#[test]
fn strict_module_bindings_stay_with_the_module() {
    assert!(CONFIGURABLE.has_reader("internal"));
    assert!(!Client::attr_table().has_reader("internal"));
    assert!(!Server::attr_table().has_writer("internal"));
}

#[test]
fn own_attributes_stay_with_the_incorporating_type() {
    Server::write_shared("port", 8080).unwrap();
    assert!(Client::read_shared("port").is_err());
    assert_eq!(Server.shared("port").unwrap(), json!(8080));
}

#[test]
fn macro_built_module_is_incorporable() {
    assert_eq!(Tagged::attr_table().kind(), OwnerKind::Module);
    assert_eq!(Tagged::attr_table().owner().label, "Taggable");

    Plain.set_shared("tag", "blue").unwrap();
    assert_eq!(Tagged::read_shared("tag").unwrap(), json!("blue"));
    assert_eq!(
        Plain::attr_table().incorporated_modules()[0].label,
        "Taggable"
    );
}

//! Command handlers working together on fixtures and generated input.

#![allow(clippy::expect_used, clippy::indexing_slicing, clippy::cast_possible_truncation)]

use proptest::prelude::*;
use txfield::cli::commands::{
    AddressCommand, ConfigCommand, ConfigSource, DecodeCommand, EncodeCommand, QuantityCommand,
};
use txfield::cli::output::OutputSettings;
use txfield::cli::ConfigAction;
use txfield_core::input::decode_hex;
use txfield_core::numeric::from_minimal_bytes;
use txfield_core::{Config, InputConfig, JsonTx, OutputFormat, U256};

use crate::common::{address_hex, fixture_path, json_tx, load_fixture, quantity_text, temp_data_dir};

fn compact_json() -> OutputSettings {
    OutputSettings {
        format: OutputFormat::Json,
        pretty: false,
    }
}

fn encode_json(tx: &JsonTx, unsigned: bool) -> String {
    let text = serde_json::to_string(tx).expect("serialize");
    let out = EncodeCommand::new(
        "-",
        unsigned,
        InputConfig::default(),
        OutputSettings::default(),
    )
    .render_from(text.as_bytes())
    .expect("encode");
    out.lines().next().expect("rlp line").to_string()
}

fn decode_json(rlp: &str) -> serde_json::Value {
    let out = DecodeCommand::new(rlp, compact_json())
        .render()
        .expect("decode");
    serde_json::from_str(&out).expect("json")
}

mod fixture_tests {
    use super::*;

    #[test]
    fn test_eip155_fixture_decodes_to_canonical_fields() {
        let fixture = load_fixture("legacy/eip155_transfer.json").expect("fixture");
        let doc = decode_json(fixture["rlp"].as_str().expect("rlp"));
        assert_eq!(doc["tx"], fixture["tx"]);
        assert_eq!(doc["signed"], true);
    }

    #[test]
    fn test_eip155_fixture_canonical_fields_reencode() {
        let fixture = load_fixture("legacy/eip155_transfer.json").expect("fixture");
        let tx: JsonTx = serde_json::from_value(fixture["tx"].clone()).expect("JsonTx");
        assert_eq!(encode_json(&tx, false), fixture["rlp"].as_str().expect("rlp"));
    }

    #[test]
    fn test_contract_creation_fixture_from_file() {
        let fixture = load_fixture("legacy/contract_creation.json").expect("fixture");
        let path = temp_data_dir();
        let input = path.path().join("input.json");
        std::fs::write(&input, fixture["input"].to_string()).expect("write input");

        let out = EncodeCommand::new(
            input,
            true,
            InputConfig::default(),
            OutputSettings::default(),
        )
        .render()
        .expect("encode");
        let rlp = out.lines().next().expect("rlp line");
        assert_eq!(rlp, fixture["rlp"].as_str().expect("rlp"));

        let doc = decode_json(rlp);
        assert_eq!(doc["tx"], fixture["tx"]);
        assert_eq!(doc["signed"], false);
    }

    #[test]
    fn test_fixture_file_is_readable_by_path() {
        assert!(fixture_path("legacy/eip155_transfer.json").exists());
    }
}

mod config_flow_tests {
    use super::*;

    #[test]
    fn test_init_then_strict_config_rejects_decimal() {
        let dir = temp_data_dir();
        let path = dir.path().join("txfield.toml");
        let source = ConfigSource::File(path.clone());

        ConfigCommand::new(Some(ConfigAction::Init { force: false }), source.clone())
            .render()
            .expect("init");

        let edited = std::fs::read_to_string(&path)
            .expect("read")
            .replace("decimal_strings = true", "decimal_strings = false")
            .replace("format = \"hex\"", "format = \"json\"");
        std::fs::write(&path, edited).expect("write");

        let config: Config = source.load().expect("load");
        assert!(!config.input.decimal_strings);

        let output = OutputSettings::resolve(&config.output, None);
        assert!(output.is_json());

        let strict = QuantityCommand::new("21000", config.input, output);
        assert!(strict.render().is_err());

        let hex = QuantityCommand::new("0x5208", config.input, output)
            .render()
            .expect("hex accepted");
        assert!(hex.contains("\"hex\": \"0x5208\""));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn address_command_is_case_insensitive(addr in address_hex()) {
        let out = AddressCommand::new(addr.clone(), OutputSettings::default())
            .render()
            .expect("valid");
        prop_assert_eq!(out, addr.to_lowercase());
    }

    #[test]
    fn quantity_command_agrees_with_value((value, text) in quantity_text()) {
        let out = QuantityCommand::new(text, InputConfig::default(), compact_json())
            .render()
            .expect("valid");
        let doc: serde_json::Value = serde_json::from_str(&out).expect("json");
        let hex = doc["hex"].as_str().expect("hex");
        prop_assert!(hex == "0x0" || !hex.starts_with("0x0"));
        prop_assert_eq!(U256::from_str_radix(&hex[2..], 16).expect("hex digits"), value);

        let bytes = decode_hex(doc["bytes"].as_str().expect("bytes")).expect("bytes hex");
        prop_assert_eq!(from_minimal_bytes(&bytes).expect("minimal"), value);
        prop_assert_eq!(doc["length"].as_u64(), Some(bytes.len() as u64));
    }

    #[test]
    fn encode_then_decode_is_canonical(tx in json_tx()) {
        let rlp = encode_json(&tx, false);
        let doc = decode_json(&rlp);

        // Decoded fields are canonical, so encoding them again is stable.
        let canonical: JsonTx = serde_json::from_value(doc["tx"].clone()).expect("JsonTx");
        prop_assert_eq!(encode_json(&canonical, false), rlp);
    }
}

//! Serialization of a [`Document`] to text.

use super::document::Document;
use crate::error::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Serialize the document, keeping section and field order.
pub fn format_document(document: &Document, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Yaml => format!("---\n{}", serde_yaml::to_string(document)?),
        OutputFormat::Json => serde_json::to_string_pretty(document)? + "\n",
    };
    Ok(text)
}

/// Print the document to stdout.
pub fn print_document(document: &Document, format: OutputFormat) -> Result<()> {
    let text = format_document(document, format)?;
    print!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::document::*;

    fn document() -> Document {
        Document {
            tenant: TenantBlock {
                name: "vnf_prod".to_string(),
                description: "".to_string(),
                password: "pw".to_string(),
                cloud: "admin".to_string(),
            },
            security_groups: vec!["default".to_string()],
            external_security_group_rules: vec![],
            internal_security_group_rules: vec![],
            networks: vec![NetworkEntry {
                name: "net".to_string(),
                ipv4: None,
                ipv6: Some(SubnetEntry {
                    cidr: "fd00::/64".to_string(),
                }),
            }],
            nodes: vec![],
            volumes: vec![VolumeEntry {
                name: "v".to_string(),
                server: None,
                volume_type: Some("ssd".to_string()),
                size: 3,
                device: None,
            }],
        }
    }

    #[test]
    fn test_yaml_section_order() {
        let text = format_document(&document(), OutputFormat::Yaml).unwrap();
        assert!(text.starts_with("---\ntenant:\n"));
        let positions: Vec<usize> = [
            "tenant:",
            "security_groups:",
            "external_security_group_rules:",
            "internal_security_group_rules:",
            "networks:",
            "nodes:",
            "volumes:",
        ]
        .iter()
        .map(|section| text.find(&format!("\n{section}")).expect(section))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
        assert!(!text.contains("ipv4"));
        assert!(text.contains("type: ssd"));
    }

    #[test]
    fn test_json_unattached_volume_is_null() {
        let text = format_document(&document(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value["volumes"][0]["server"].is_null());
        assert!(value["volumes"][0]["device"].is_null());
        assert_eq!(value["networks"][0]["ipv6"]["cidr"], "fd00::/64");
    }
}

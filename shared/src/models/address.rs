//! Address display denormalization.
//!
//! Addresses arrive in two persisted shapes: free text from the old admin
//! forms, or a list of structured entries from the mobile app (region
//! names pre-resolved upstream). Only display joining happens here.

use serde::{Deserialize, Serialize};

use super::serde_helpers::opt_stringy;

/// A region reference: either the resolved `{code, name}` pair or a bare
/// code whose name was never resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Region {
    Detailed(CodeName),
    Code(serde_json::Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeName {
    #[serde(default, deserialize_with = "opt_stringy")]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Region {
    /// The display name, if one was resolved.
    pub fn name(&self) -> Option<&str> {
        match self {
            Region::Detailed(cn) => cn.name.as_deref().map(str::trim).filter(|n| !n.is_empty()),
            Region::Code(_) => None,
        }
    }
}

/// One structured address entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressEntry {
    #[serde(default)]
    pub detail_alamat: Option<String>,
    #[serde(default)]
    pub kelurahan: Option<Region>,
    #[serde(default)]
    pub kecamatan: Option<Region>,
    #[serde(default)]
    pub kota_kab: Option<Region>,
    #[serde(default)]
    pub provinsi: Option<Region>,
    #[serde(default, deserialize_with = "opt_stringy")]
    pub kode_pos: Option<String>,
}

impl AddressEntry {
    /// Comma-join of the non-blank parts: detail, village, district,
    /// city, province, postal code.
    pub fn text(&self) -> Option<String> {
        let regions = [
            self.kelurahan.as_ref(),
            self.kecamatan.as_ref(),
            self.kota_kab.as_ref(),
            self.provinsi.as_ref(),
        ];
        let mut parts: Vec<&str> = Vec::new();
        if let Some(detail) = self.detail_alamat.as_deref() {
            let detail = detail.trim();
            if !detail.is_empty() && detail != "-" {
                parts.push(detail);
            }
        }
        for region in regions.into_iter().flatten() {
            if let Some(name) = region.name() {
                if name != "-" {
                    parts.push(name);
                }
            }
        }
        if let Some(kode) = self.kode_pos.as_deref() {
            if !kode.is_empty() && kode != "-" {
                parts.push(kode);
            }
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// The raw `address` column in all its historical shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AddressField {
    Entries(Vec<AddressEntry>),
    Single(AddressEntry),
    Text(String),
    Other(serde_json::Value),
}

impl Default for AddressField {
    fn default() -> Self {
        AddressField::Entries(Vec::new())
    }
}

impl AddressField {
    /// One display line for the whole column.
    ///
    /// Free text passes through trimmed; legacy rows holding the JSON
    /// encoding of the entry list are decoded first. Multiple entries are
    /// joined with `" | "`. Blank input is `None`.
    pub fn text(&self) -> Option<String> {
        match self {
            AddressField::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return None;
                }
                // legacy rows may hold the JSON encoding of the entry list
                if trimmed.starts_with('[') || trimmed.starts_with('{') {
                    if let Ok(decoded) = serde_json::from_str::<AddressField>(trimmed) {
                        return decoded.text();
                    }
                }
                Some(trimmed.to_string())
            }
            AddressField::Entries(entries) => {
                let parts: Vec<String> =
                    entries.iter().filter_map(AddressEntry::text).collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join(" | "))
                }
            }
            AddressField::Single(entry) => entry.text(),
            AddressField::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Region {
        Region::Detailed(CodeName { code: Some("0".to_string()), name: Some(name.to_string()) })
    }

    #[test]
    fn plain_text_passes_through() {
        let field = AddressField::Text("  Jl. Merdeka No. 1  ".to_string());
        assert_eq!(field.text().as_deref(), Some("Jl. Merdeka No. 1"));
        assert_eq!(AddressField::Text("   ".to_string()).text(), None);
    }

    #[test]
    fn structured_entry_joins_resolved_parts() {
        let entry = AddressEntry {
            detail_alamat: Some("Jl. Merdeka No. 1".to_string()),
            kelurahan: Some(named("Cihapit")),
            kecamatan: Some(named("Bandung Wetan")),
            kota_kab: Some(named("Kota Bandung")),
            provinsi: Some(named("Jawa Barat")),
            kode_pos: Some("40114".to_string()),
        };
        assert_eq!(
            AddressField::Single(entry).text().as_deref(),
            Some("Jl. Merdeka No. 1, Cihapit, Bandung Wetan, Kota Bandung, Jawa Barat, 40114"),
        );
    }

    #[test]
    fn unresolved_codes_and_dashes_are_skipped() {
        let entry = AddressEntry {
            detail_alamat: Some("-".to_string()),
            provinsi: Some(Region::Code(serde_json::json!("32"))),
            kota_kab: Some(named("Kota Bandung")),
            ..Default::default()
        };
        assert_eq!(AddressField::Single(entry).text().as_deref(), Some("Kota Bandung"));
    }

    #[test]
    fn json_encoded_entries_decode() {
        let raw = r#"[{"detail_alamat": "Gudang Timur", "kode_pos": 40114}]"#;
        let field = AddressField::Text(raw.to_string());
        assert_eq!(field.text().as_deref(), Some("Gudang Timur, 40114"));
    }

    #[test]
    fn multiple_entries_join_with_pipe() {
        let entries = vec![
            AddressEntry { detail_alamat: Some("Toko Pusat".to_string()), ..Default::default() },
            AddressEntry { detail_alamat: Some("Gudang".to_string()), ..Default::default() },
        ];
        assert_eq!(
            AddressField::Entries(entries).text().as_deref(),
            Some("Toko Pusat | Gudang"),
        );
    }

    #[test]
    fn deserializes_mixed_region_shapes() {
        let field: AddressField = serde_json::from_str(
            r#"[{
                "detail_alamat": "Jl. Anggrek 7",
                "provinsi": {"code": "32", "name": "Jawa Barat"},
                "kecamatan": "3204",
                "kode_pos": "40114"
            }]"#,
        )
        .unwrap();
        assert_eq!(field.text().as_deref(), Some("Jl. Anggrek 7, Jawa Barat, 40114"));
    }
}

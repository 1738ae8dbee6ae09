// src/domain/audit/content.rs
//
// Codec for the single-text-field content format carried by audit entries.
// Product-lifecycle events are encoded as a bracketed outcome tag followed by
// a comma-separated `Key:Value` list in a fixed field order; account events
// are free-form text and pass through untouched.
use crate::domain::audit::kind::AuditKind;
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

/// Position of the `Quantity` segment once the leading tag is stripped:
/// ProductId, ProductNo, ProductName, Manufacturer, BatchNo, Quantity, ...
pub const QUANTITY_FIELD_INDEX: usize = 5;

const CONTENT_DATE_FORMAT: &str = "%d/%m/%Y %I:%M:%S %P";

/// Denormalized product snapshot embedded into audit content at write time.
/// Products are mutable, so the trail keeps its own copy of the fields as of
/// the action rather than a reference into live rows.
#[derive(Debug, Clone)]
pub struct ProductFields {
    /// Unknown for AddProduct until the row is inserted; the store prefixes
    /// `ProductId:<id>,` once the id has been assigned.
    pub product_id: Option<i32>,
    pub product_no: String,
    pub product_name: String,
    pub manufacturer: String,
    pub batch_no: String,
    pub quantity: i32,
    pub category_id: i32,
    pub mfg_date: Option<NaiveDateTime>,
    pub mfg_expiry_date: Option<NaiveDateTime>,
}

impl fmt::Display for ProductFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = self.product_id {
            write!(f, "ProductId:{id},")?;
        }
        write!(
            f,
            "ProductNo:{},ProductName:{},Manufacturer:{},BatchNo:{},Quantity:{},CategoryId:{},MfgDate:{},MfgExpiryDate:{}",
            self.product_no,
            self.product_name,
            self.manufacturer,
            self.batch_no,
            self.quantity,
            self.category_id,
            format_content_date(self.mfg_date),
            format_content_date(self.mfg_expiry_date),
        )
    }
}

fn format_content_date(date: Option<NaiveDateTime>) -> String {
    date.map(|d| d.format(CONTENT_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Encode a product-lifecycle event as `[<tag>]Key:Value,...`.
pub fn encode_product_event(tag: &str, fields: &ProductFields) -> String {
    format!("[{tag}]{fields}")
}

/// Prefix an encoded content string with the product id assigned at insert
/// time. The tag stays in front; the id becomes the first field.
pub fn prefix_product_id(content: &str, product_id: i32) -> String {
    match content.find(']') {
        Some(pos) if content.starts_with('[') => {
            let (tag, body) = content.split_at(pos + 1);
            format!("{tag}ProductId:{product_id},{body}")
        }
        _ => format!("ProductId:{product_id},{content}"),
    }
}

/// Render stored content for display. Product kinds get the leading bracket
/// tag removed and one `Key:Value` pair per line; account kinds are returned
/// unchanged.
pub fn format_content(content: &str, kind: AuditKind) -> String {
    if kind.is_product_event() {
        strip_tag(content).replace(',', "\n")
    } else {
        content.to_string()
    }
}

fn strip_tag(content: &str) -> &str {
    if content.starts_with('[') {
        match content.find(']') {
            Some(pos) => &content[pos + 1..],
            None => content,
        }
    } else {
        content
    }
}

/// Best-effort scalar extraction from historical content. Splits the tag-less
/// content on commas, indexes the expected segment, verifies the field name
/// and parses the remainder. Any mismatch or parse failure yields the type's
/// default instead of an error; legacy rows are not uniformly well-formed.
pub fn extract_field<T>(content: &str, field_name: &str, field_index: usize) -> T
where
    T: FromStr + Default,
{
    let prefix = format!("{field_name}:");
    strip_tag(content)
        .split(',')
        .nth(field_index)
        .and_then(|segment| segment.strip_prefix(&prefix))
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or_default()
}

/// Whether content carries the explicit `ProductId:<id>` token. Replaces an
/// earlier fixed-width substring scan, which broke on variable-length
/// product fields.
pub fn references_product(content: &str, product_id: i32) -> bool {
    let token = format!("ProductId:{product_id}");
    strip_tag(content)
        .split(',')
        .any(|segment| segment == token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_fields(product_id: Option<i32>) -> ProductFields {
        ProductFields {
            product_id,
            product_no: "BEV-001".into(),
            product_name: "Cold Brew Coffee".into(),
            manufacturer: "Brew Masters".into(),
            batch_no: "B2023-06".into(),
            quantity: 427,
            category_id: 5,
            mfg_date: NaiveDate::from_ymd_opt(2024, 9, 11).and_then(|d| d.and_hms_opt(0, 0, 0)),
            mfg_expiry_date: NaiveDate::from_ymd_opt(2025, 10, 26)
                .and_then(|d| d.and_hms_opt(0, 0, 0)),
        }
    }

    #[test]
    fn encodes_product_event_in_fixed_field_order() {
        let content = encode_product_event("AddProductSuccess", &sample_fields(Some(1)));
        assert_eq!(
            content,
            "[AddProductSuccess]ProductId:1,ProductNo:BEV-001,ProductName:Cold Brew Coffee,\
             Manufacturer:Brew Masters,BatchNo:B2023-06,Quantity:427,CategoryId:5,\
             MfgDate:11/09/2024 12:00:00 am,MfgExpiryDate:26/10/2025 12:00:00 am"
        );
    }

    #[test]
    fn prefix_product_id_inserts_after_tag() {
        let content = encode_product_event("AddProductSuccess", &sample_fields(None));
        let prefixed = prefix_product_id(&content, 42);
        assert!(prefixed.starts_with("[AddProductSuccess]ProductId:42,ProductNo:BEV-001,"));
    }

    #[test]
    fn encode_then_format_round_trips_field_lines() {
        let content = encode_product_event("AddProductSuccess", &sample_fields(Some(1)));
        let formatted = format_content(&content, AuditKind::AddProduct);
        let lines: Vec<&str> = formatted.lines().collect();
        assert_eq!(lines[0], "ProductId:1");
        assert_eq!(lines[1], "ProductNo:BEV-001");
        assert_eq!(lines[2], "ProductName:Cold Brew Coffee");
        assert_eq!(lines[3], "Manufacturer:Brew Masters");
        assert_eq!(lines[4], "BatchNo:B2023-06");
        assert_eq!(lines[5], "Quantity:427");
        assert_eq!(lines[6], "CategoryId:5");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn account_content_passes_through_unchanged() {
        assert_eq!(
            format_content("Login successful", AuditKind::Login),
            "Login successful"
        );
        assert_eq!(
            format_content("Invalid username - bob", AuditKind::Login),
            "Invalid username - bob"
        );
    }

    #[test]
    fn extracts_quantity_from_well_formed_content() {
        let content = encode_product_event("EditProductSuccess", &sample_fields(Some(1)));
        let quantity: i32 = extract_field(&content, "Quantity", QUANTITY_FIELD_INDEX);
        assert_eq!(quantity, 427);
    }

    #[test]
    fn extract_field_defaults_on_malformed_content() {
        let quantity: i32 = extract_field("free text entry", "Quantity", QUANTITY_FIELD_INDEX);
        assert_eq!(quantity, 0);

        let truncated = "[EditProductSuccess]ProductId:1,ProductNo:BEV-001";
        let quantity: i32 = extract_field(truncated, "Quantity", QUANTITY_FIELD_INDEX);
        assert_eq!(quantity, 0);

        let wrong_position = "[X]A:1,B:2,C:3,D:4,E:5,Quantity:not-a-number";
        let quantity: i32 = extract_field(wrong_position, "Quantity", QUANTITY_FIELD_INDEX);
        assert_eq!(quantity, 0);
    }

    #[test]
    fn references_product_matches_exact_token_only() {
        let content = encode_product_event("AddProductSuccess", &sample_fields(Some(1)));
        assert!(references_product(&content, 1));
        assert!(!references_product(&content, 11));

        let other = encode_product_event("AddProductSuccess", &sample_fields(Some(12)));
        assert!(!references_product(&other, 1));
        assert!(references_product(&other, 12));
    }
}

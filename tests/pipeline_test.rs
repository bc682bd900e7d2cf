//! Integration tests running a realistic whole-quote text through the
//! full pipeline.

use quotebom::{process_text, Error, QuoteBom};

/// Decoded text of a representative quote, with the tokenization artifacts
/// PDF extraction actually produces: split vocabulary, split product codes,
/// split year digits, spaced currency, and a split email address.
const RAW_QUOTE: &str = "\
Quo tation
Quote Number Q - 2026 - 0042
Quote Date January 30, 2 026
Quote Expires March 1, 2 026
Customer Name Acme Research Labs
Partner Name Summit Channel
Prepared By Jane Smith jsmith @ vendor.example
V5000 Configuration
PART NO. DESCRIPTION QTY
VDP - VDURACare - 10 - HP VDURACare Sub scription, per TB 21 60 $ 500.00 $ 90.00 $ 113,400.00
SVC - R1 - CINT - PDEP - NORACK Deployment Service 1 $ 15,180.00 $ 7,590.00 $ 7,590.00
HW - CHASSIS - 2U Storage Chassis 4 $ 2,000.00 $ 1,500.00 $ 6,000.00
Total Software
";

#[test]
fn test_header_survives_artifacts() {
    let bom = process_text(RAW_QUOTE, "006XXXXXXXXXXXXXXX").unwrap();
    assert_eq!(bom.header.quote_number, "Q-2026-0042");
    assert_eq!(bom.header.quote_date, "01/30/2026");
    assert_eq!(bom.header.quote_expires, "03/01/2026");
    assert_eq!(bom.header.customer_name, "Acme Research Labs");
    assert_eq!(bom.header.partner_name, "Summit Channel");
    assert_eq!(bom.header.prepared_by, "Jane Smith");
    assert_eq!(bom.header.email, "jsmith@vendor.example");
}

#[test]
fn test_items_survive_artifacts() {
    let bom = process_text(RAW_QUOTE, "006XXXXXXXXXXXXXXX").unwrap();
    assert_eq!(bom.items.len(), 3);
    assert_eq!(bom.items[0].part_no, "VDP-VDURACare-10-HP");
    assert_eq!(bom.items[0].qty, 21);
    assert_eq!(bom.items[0].months, Some(60));
    assert_eq!(bom.items[1].part_no, "SVC-R1-CINT-PDEP-NORACK");
    assert_eq!(bom.items[1].months, None);
    assert_eq!(bom.items[2].part_no, "HW-CHASSIS-2U");
    assert_eq!(bom.items[2].extended_price, 6000.0);
}

#[test]
fn test_care_expansion_in_output() {
    let bom = process_text(RAW_QUOTE, "006XXXXXXXXXXXXXXX").unwrap();
    // 3 items, care expands to 3 rows: 3 + 1 + 1
    assert_eq!(bom.rows.len(), 5);

    let codes: Vec<&str> = bom.rows.iter().map(|r| r.product_code.as_str()).collect();
    assert_eq!(
        codes,
        [
            "VDP-VDURACare-10-HP",
            "VDP-SW-P-10-HP",
            "HW-Support-HP-NBD",
            "SVC-R1-CINT-PDEP-NORACK",
            "HW-CHASSIS-2U",
        ]
    );

    let software = &bom.rows[1];
    assert_eq!(software.parent_product_code, "VDP-VDURACare-10-HP");
    assert_eq!(software.discount_price, "87.00");
    assert_eq!(software.extended_price, "109620.00");
    assert_eq!(software.discount_percentage, "0.00");

    let support = &bom.rows[2];
    assert_eq!(support.discount_price, "3.00");
    assert_eq!(support.extended_price, "3780.00");

    let service = &bom.rows[3];
    assert_eq!(service.discount_percentage, "50.00");
    assert_eq!(service.month, "");
}

#[test]
fn test_csv_output_contract() {
    let bom = process_text(RAW_QUOTE, "006XXXXXXXXXXXXXXX").unwrap();
    let csv = bom.to_csv().unwrap();
    let mut lines = csv.lines();

    let header = lines.next().unwrap();
    assert!(header.starts_with("Quote Date,Opportunity ID,Customer Name,"));
    assert!(header.ends_with("Quote Expires,Status"));
    assert_eq!(header.split(',').count(), 20);

    assert_eq!(csv.lines().count(), 6);
    for line in lines {
        assert!(line.contains("006XXXXXXXXXXXXXXX"));
        assert!(line.ends_with(",Draft"));
    }

    // the comma inside the care description forces quoting
    assert!(csv.contains("\"VDURACare Subscription, per TB\""));
}

#[test]
fn test_csv_file_roundtrip() {
    let bom = process_text(RAW_QUOTE, "006XXXXXXXXXXXXXXX").unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = bom.write_csv_file(dir.path()).unwrap();

    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("Quote_Number_Q-2026-0042_BOM_"));
    assert!(name.ends_with(".csv"));
    // timestamp must carry no colons or dots besides the extension
    assert_eq!(name.matches(':').count(), 0);
    assert_eq!(name.matches('.').count(), 1);

    let content = std::fs::read_to_string(path).unwrap();
    assert_eq!(content.lines().count(), 6);
}

#[test]
fn test_unknown_document_is_rejected() {
    let text = "This is a packing slip, not a quotation. No product codes here.";
    assert!(matches!(
        process_text(text, "006XXXXXXXXXXXXXXX"),
        Err(Error::NoLineItems)
    ));
}

#[test]
fn test_duplicate_lines_collapse() {
    let text = "SVC-DEPLOY Deployment 1 $100.00 $90.00 $90.00 \
                SVC-DEPLOY Deployment 1 $100.00 $90.00 $90.00";
    let bom = process_text(text, "OPP").unwrap();
    assert_eq!(bom.items.len(), 1);
    assert_eq!(bom.rows.len(), 1);
}

#[test]
fn test_opportunity_id_not_validated() {
    // length validation is a UI concern; the core stamps whatever it is given
    let bom = QuoteBom::new()
        .with_opportunity_id("short")
        .process("SVC-DEPLOY Deployment 1 $100.00 $90.00 $90.00")
        .unwrap();
    assert_eq!(bom.rows[0].opportunity_id, "short");
}

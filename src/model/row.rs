//! Flat output rows, one per CSV line.

use serde::{Deserialize, Serialize};

/// Status value stamped on every generated row.
pub const DEFAULT_STATUS: &str = "Draft";

/// One line of the output bill of materials.
///
/// Produced only by the pricing transformer; 1:1 with a billable line
/// (a parent item, or one of its derived children). The serde renames carry
/// the exact CSV column names, so the `csv` writer emits the 20-column
/// header directly from this definition; field order here IS the column
/// order of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    #[serde(rename = "Quote Date")]
    pub quote_date: String,

    #[serde(rename = "Opportunity ID")]
    pub opportunity_id: String,

    #[serde(rename = "Customer Name")]
    pub customer_name: String,

    #[serde(rename = "Partner Name")]
    pub partner_name: String,

    #[serde(rename = "Prepared By")]
    pub prepared_by: String,

    #[serde(rename = "Email")]
    pub email: String,

    #[serde(rename = "Quote Number")]
    pub quote_number: String,

    #[serde(rename = "Base Product Code")]
    pub base_product_code: String,

    #[serde(rename = "Base Description")]
    pub base_description: String,

    #[serde(rename = "Product Code")]
    pub product_code: String,

    /// Empty for parent/standalone rows; the parent part number for derived
    /// child rows.
    #[serde(rename = "Parent Product Code")]
    pub parent_product_code: String,

    /// Per-unit list price, 2 decimal digits
    #[serde(rename = "List Price")]
    pub list_price: String,

    /// Discount off list, percent, 2 decimal digits
    #[serde(rename = "Discount Percentage")]
    pub discount_percentage: String,

    /// Per-unit discounted price, 2 decimal digits
    #[serde(rename = "Discount Price")]
    pub discount_price: String,

    #[serde(rename = "Option QTY")]
    pub option_qty: u32,

    /// Subscription months; empty for non-subscription parent rows
    #[serde(rename = "Month")]
    pub month: String,

    /// Total line price, 2 decimal digits
    #[serde(rename = "Extended Price")]
    pub extended_price: String,

    #[serde(rename = "Option Description")]
    pub option_description: String,

    #[serde(rename = "Quote Expires")]
    pub quote_expires: String,

    #[serde(rename = "Status")]
    pub status: String,
}

/// The 20 CSV column names, in contract order.
pub(crate) const COLUMNS: [&str; 20] = [
    "Quote Date",
    "Opportunity ID",
    "Customer Name",
    "Partner Name",
    "Prepared By",
    "Email",
    "Quote Number",
    "Base Product Code",
    "Base Description",
    "Product Code",
    "Parent Product Code",
    "List Price",
    "Discount Percentage",
    "Discount Price",
    "Option QTY",
    "Month",
    "Extended Price",
    "Option Description",
    "Quote Expires",
    "Status",
];

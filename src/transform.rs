//! Pricing transformation: line items to output rows.
//!
//! Non-care items project 1:1 onto output rows. Care subscriptions expand
//! into three rows: the parent as quoted, then a derived software child and
//! a fixed-price support child from the tier catalog. All monetary fields
//! leave this stage formatted to two decimal digits.

use log::warn;

use crate::model::{
    ChildCatalog, ChildPricing, ChildProduct, LineItem, OutputRow, ProductFamily, QuoteHeader,
    DEFAULT_STATUS,
};
use crate::money::format_amount;

/// Expands line items into billable output rows.
pub struct PricingTransformer {
    catalog: ChildCatalog,
}

impl PricingTransformer {
    /// Create a transformer with an injected child-product catalog.
    pub fn new(catalog: ChildCatalog) -> Self {
        Self { catalog }
    }

    /// Create a transformer with the built-in vendor catalog.
    pub fn with_builtin_catalog() -> Self {
        Self::new(ChildCatalog::builtin())
    }

    /// Transform extracted items into output rows, in original item order.
    ///
    /// Pure and total over well-formed items: unknown care tiers degrade to
    /// the standard single-row rule instead of failing.
    pub fn transform(
        &self,
        header: &QuoteHeader,
        items: &[LineItem],
        opportunity_id: &str,
        base_product_code: &str,
    ) -> Vec<OutputRow> {
        let seed = RowSeed {
            header,
            opportunity_id,
            base_product_code,
            base_description: format!("{} Configuration", base_product_code),
        };

        let mut rows = Vec::new();
        for item in items {
            match item.family() {
                ProductFamily::CareSubscription { tier } => match self.catalog.get(&tier) {
                    Some(children) => {
                        rows.push(standard_row(&seed, item));
                        let support_unit = match children.support.pricing {
                            ChildPricing::FixedUnit(price) => price,
                            ChildPricing::ParentRemainder => 0.0,
                        };
                        rows.push(child_row(&seed, item, &children.software, support_unit));
                        rows.push(child_row(&seed, item, &children.support, support_unit));
                    }
                    None => {
                        warn!("no catalog entry for care tier {tier}, emitting standard row");
                        rows.push(standard_row(&seed, item));
                    }
                },
                _ => rows.push(standard_row(&seed, item)),
            }
        }
        rows
    }
}

impl Default for PricingTransformer {
    fn default() -> Self {
        Self::with_builtin_catalog()
    }
}

/// Shared per-document context stamped onto every row.
struct RowSeed<'a> {
    header: &'a QuoteHeader,
    opportunity_id: &'a str,
    base_product_code: &'a str,
    base_description: String,
}

impl RowSeed<'_> {
    fn row(&self) -> OutputRow {
        OutputRow {
            quote_date: self.header.quote_date.clone(),
            opportunity_id: self.opportunity_id.to_string(),
            customer_name: self.header.customer_name.clone(),
            partner_name: self.header.partner_name.clone(),
            prepared_by: self.header.prepared_by.clone(),
            email: self.header.email.clone(),
            quote_number: self.header.quote_number.clone(),
            base_product_code: self.base_product_code.to_string(),
            base_description: self.base_description.clone(),
            product_code: String::new(),
            parent_product_code: String::new(),
            list_price: String::new(),
            discount_percentage: String::new(),
            discount_price: String::new(),
            option_qty: 0,
            month: String::new(),
            extended_price: String::new(),
            option_description: String::new(),
            quote_expires: self.header.quote_expires.clone(),
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

/// The standard row rule: one row, prices as quoted, discount computed off
/// list price. Month is empty for non-subscription items.
fn standard_row(seed: &RowSeed<'_>, item: &LineItem) -> OutputRow {
    let pct = if item.list_price == 0.0 {
        0.0
    } else {
        (item.list_price - item.discount_price) / item.list_price * 100.0
    };
    let mut row = seed.row();
    row.product_code = item.part_no.clone();
    row.list_price = format_amount(item.list_price);
    row.discount_percentage = format_amount(pct);
    row.discount_price = format_amount(item.discount_price);
    row.option_qty = item.qty;
    row.month = item.months.map(|m| m.to_string()).unwrap_or_default();
    row.extended_price = format_amount(item.extended_price);
    row.option_description = item.description.clone();
    row
}

/// A derived child row: list == discount (0% by construction), month
/// defaults to 1 when the parent has none, extended price recomputed from
/// the child's unit price.
fn child_row(
    seed: &RowSeed<'_>,
    parent: &LineItem,
    child: &ChildProduct,
    support_unit: f64,
) -> OutputRow {
    let unit = match child.pricing {
        ChildPricing::ParentRemainder => parent.discount_price - support_unit,
        ChildPricing::FixedUnit(price) => price,
    };
    let month = parent.months.unwrap_or(1);
    let extended = unit * parent.qty as f64 * month as f64;

    let mut row = seed.row();
    row.product_code = child.code.clone();
    row.parent_product_code = parent.part_no.clone();
    row.list_price = format_amount(unit);
    row.discount_percentage = format_amount(0.0);
    row.discount_price = format_amount(unit);
    row.option_qty = parent.qty;
    row.month = month.to_string();
    row.extended_price = format_amount(extended);
    row.option_description = child.description.clone();
    row
}

use std::cell::RefCell;

use super::*;
use crate::net::error::ApiError;
use crate::state::page::{Lifetime, PageEffects, finish_load};

#[derive(Default)]
struct Recorder {
    errors: RefCell<usize>,
    navigations: RefCell<Vec<String>>,
}

impl PageEffects for Recorder {
    fn notify_error(&self, _title: &str, _message: &str) {
        *self.errors.borrow_mut() += 1;
    }

    fn navigate(&self, to: &str) {
        self.navigations.borrow_mut().push(to.to_owned());
    }

    fn expire_session(&self) {}
}

fn dated(id: &str, purchase_date: Option<&str>) -> Asset {
    Asset { purchase_date: purchase_date.map(str::to_owned), ..asset(id, AssetStatus::Active, None) }
}

fn asset(id: &str, status: AssetStatus, current_value: Option<f64>) -> Asset {
    Asset {
        id: id.to_owned(),
        company_id: "c1".to_owned(),
        code: format!("A-{id}"),
        name: format!("Activo {id}"),
        status,
        purchase_value: None,
        current_value,
        purchase_date: None,
        category_id: None,
        site_id: None,
        area_id: None,
        owner_id: None,
        description: None,
    }
}

#[test]
fn summarize_counts_every_status_and_sums_values() {
    let assets = vec![
        asset("1", AssetStatus::Active, Some(1_000_000.0)),
        asset("2", AssetStatus::Active, Some(500_000.0)),
        asset("3", AssetStatus::Lost, None),
    ];
    let summary = summarize(&assets, &[]);
    assert_eq!(summary.total_assets, 3);
    assert_eq!(summary.total_value, 1_500_000.0);
    assert_eq!(summary.employee_count, 0);
    assert_eq!(
        summary.by_status,
        vec![
            (AssetStatus::Active, 2),
            (AssetStatus::UnderMaintenance, 0),
            (AssetStatus::Retired, 0),
            (AssetStatus::Lost, 1),
        ]
    );
}

#[test]
fn summarize_empty_inventory() {
    let summary = summarize(&[], &[]);
    assert_eq!(summary.total_assets, 0);
    assert_eq!(summary.total_value, 0.0);
    assert!(summary.by_status.iter().all(|(_, count)| *count == 0));
}

#[test]
fn failed_summary_load_notifies_once_and_leaves_the_dashboard() {
    let effects = Recorder::default();
    let result: Result<(Vec<Asset>, Vec<Employee>), ApiError> =
        Err(ApiError::Status { status: 500, message: "caído".to_owned() });
    assert!(finish_load(result, &Lifetime::new(), Some(LOAD_FAILURE_ROUTE), &effects).is_none());
    assert_eq!(*effects.errors.borrow(), 1);
    assert_eq!(*effects.navigations.borrow(), vec!["/assets".to_owned()]);
    assert_ne!(LOAD_FAILURE_ROUTE, crate::config::DEFAULT_ROUTE);
}

#[test]
fn recent_assets_are_latest_purchases_first() {
    let assets = vec![
        dated("old", Some("2021-03-01")),
        dated("none", None),
        dated("new", Some("2024-06-15")),
        dated("mid", Some("2023-01-20")),
    ];
    let ids: Vec<String> = recent_assets(assets, 3).into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[test]
fn recent_assets_puts_undated_last() {
    let assets = vec![dated("none", None), dated("a", Some("2020-01-01"))];
    let ids: Vec<String> = recent_assets(assets, 5).into_iter().map(|a| a.id).collect();
    assert_eq!(ids, vec!["a", "none"]);
}

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::ListRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Order::Asc => Order::Desc,
            Order::Desc => Order::Asc,
        }
    }
}

/// Comparator for one column in one direction.
pub fn get_comparator<R: ListRecord>(
    order: Order,
    order_by: R::Column,
) -> impl Fn(&R, &R) -> Ordering {
    move |a, b| {
        let ordering = a.compare(b, order_by);
        match order {
            Order::Asc => ordering,
            Order::Desc => ordering.reverse(),
        }
    }
}

/// Sorts by `comparator`, breaking ties on the original position so equal
/// rows keep their input order.
pub fn stable_sort<R, F>(input: &[R], comparator: F) -> Vec<R>
where
    R: Clone,
    F: Fn(&R, &R) -> Ordering,
{
    let mut indexed: Vec<(usize, &R)> = input.iter().enumerate().collect();

    indexed.sort_unstable_by(|(ia, a), (ib, b)| comparator(a, b).then_with(|| ia.cmp(ib)));

    indexed.into_iter().map(|(_, row)| row.clone()).collect()
}

/// Case-insensitive ordering for text columns.
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Case-insensitive ordering for optional text; missing values first.
pub fn cmp_opt_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp_text(a, b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

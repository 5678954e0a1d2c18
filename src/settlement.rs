//! Debt netting: reduce every wager outcome in a round to the smallest
//! practical set of payer-to-payee transfers.

use crate::model::{Debt, round_cents};
use ahash::RandomState;
use std::collections::HashMap;

/// Balances inside this window of zero are treated as settled, absorbing
/// floating rounding from per-player skin splits.
const SETTLED_EPSILON: f64 = 0.01;

/// Net a list of debts down to a minimal transfer set.
///
/// Greedy largest-against-largest matching: not provably optimal, but on the
/// small, similarly staked groups this serves it produces at most
/// `debtors + creditors - 1` transfers and never more than the input count.
/// Output order is deterministic regardless of input order.
#[must_use]
pub fn simplify_debts(debts: &[Debt]) -> Vec<Debt> {
    let mut balances: HashMap<String, f64, RandomState> = HashMap::default();
    for debt in debts {
        *balances.entry(debt.from.clone()).or_insert(0.0) -= debt.amount;
        *balances.entry(debt.to.clone()).or_insert(0.0) += debt.amount;
    }

    let mut debtors: Vec<(String, f64)> = Vec::new();
    let mut creditors: Vec<(String, f64)> = Vec::new();
    for (id, balance) in balances {
        if balance < -SETTLED_EPSILON {
            debtors.push((id, -balance));
        } else if balance > SETTLED_EPSILON {
            creditors.push((id, balance));
        }
    }

    // largest exposure first; ties broken by id so output is stable
    let by_magnitude =
        |a: &(String, f64), b: &(String, f64)| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0));
    debtors.sort_by(by_magnitude);
    creditors.sort_by(by_magnitude);

    let mut simplified = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let transfer = debtors[i].1.min(creditors[j].1);

        if transfer > SETTLED_EPSILON {
            simplified.push(Debt {
                from: debtors[i].0.clone(),
                to: creditors[j].0.clone(),
                amount: round_cents(transfer),
            });
        }

        debtors[i].1 -= transfer;
        creditors[j].1 -= transfer;

        if debtors[i].1 < SETTLED_EPSILON {
            i += 1;
        }
        if creditors[j].1 < SETTLED_EPSILON {
            j += 1;
        }
    }

    simplified
}

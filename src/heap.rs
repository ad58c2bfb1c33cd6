// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Max-heap over expenses used to answer "largest N" queries.
//!
//! The heap only supports root extraction. Removing an arbitrary expense means
//! rebuilding it from the authoritative expense set.

use crate::models::Expense;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    expense: Expense,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Larger amount first; on ties the earlier insertion wins.
    fn cmp(&self, other: &Self) -> Ordering {
        self.expense
            .amount
            .cmp(&other.expense.amount)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseHeap {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl ExpenseHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_expenses<I: IntoIterator<Item = Expense>>(expenses: I) -> Self {
        let mut h = Self::new();
        h.rebuild(expenses);
        h
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn insert(&mut self, expense: Expense) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { seq, expense });
    }

    pub fn peek_max(&self) -> Option<&Expense> {
        self.heap.peek().map(|e| &e.expense)
    }

    pub fn extract_max(&mut self) -> Option<Expense> {
        self.heap.pop().map(|e| e.expense)
    }

    /// The `n` largest expenses, descending by amount. Leaves the heap untouched.
    pub fn top_n(&self, n: usize) -> Vec<Expense> {
        let take = n.min(self.heap.len());
        let mut scratch = self.heap.clone();
        let mut out = Vec::with_capacity(take);
        while out.len() < take {
            match scratch.pop() {
                Some(e) => out.push(e.expense),
                None => break,
            }
        }
        out
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }

    /// Drop everything and reinsert `expenses` in iteration order.
    pub fn rebuild<I: IntoIterator<Item = Expense>>(&mut self, expenses: I) {
        self.clear();
        for e in expenses {
            self.insert(e);
        }
    }
}

// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Catalog manager: orchestration over any [`Catalog`] implementor.
//!
//! ```text
//! CatalogManager::new(store)
//!   .add_book("Dune", "Herbert", 1965)  --> "Book 'Dune' added successfully!"
//!   .remove_book("Dune")                --> "Book 'Dune' removed successfully!"
//!   .show_books()                       --> listing or empty-state line
//! ```
//!
//! The manager holds the store through the `Catalog` bound only and delegates
//! every storage decision to it. Operations return the user-facing line(s);
//! the boundary layer decides where they go.

use tracing::debug;

use super::{Book, Catalog, YearFilter};

/// Orchestration wrapper around a book store.
#[derive(Debug, Clone)]
pub struct CatalogManager<C: Catalog> {
    catalog: C,
}

impl<C: Catalog> CatalogManager<C> {
    /// Creates a manager over the given store.
    #[must_use]
    pub const fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Gets a reference to the held store.
    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Builds a [`Book`] from primitive inputs and appends it.
    ///
    /// Returns the confirmation line. Cannot fail: year conversion happens
    /// before this layer.
    pub fn add_book(&mut self, title: &str, author: &str, year: i32) -> String {
        self.catalog.add_book(Book::new(title, author, year));
        debug!(title, author, year, "book added");
        format!("Book '{title}' added successfully!")
    }

    /// Removes every book with the given title.
    ///
    /// Returns the confirmation line. Removing an absent title still
    /// confirms: the store treats it as a no-op, not an error.
    pub fn remove_book(&mut self, title: &str) -> String {
        self.catalog.remove_book(title);
        debug!(title, "book removed");
        format!("Book '{title}' removed successfully!")
    }

    /// Lists the stored books, or reports emptiness.
    #[must_use]
    pub fn show_books(&self) -> Vec<String> {
        let books = self.catalog.books();
        if books.is_empty() {
            return vec!["No books in the library.".to_string()];
        }

        let mut lines = Vec::with_capacity(books.len() + 1);
        lines.push("Books in the library:".to_string());
        lines.extend(books.iter().map(ToString::to_string));
        lines
    }
}

impl<C: Catalog + YearFilter> CatalogManager<C> {
    /// Lists the books published in `year`, or reports an empty result.
    ///
    /// Only available when the held store also satisfies [`YearFilter`].
    #[must_use]
    pub fn show_books_by_year(&self, year: i32) -> Vec<String> {
        let books = self.catalog.books_by_year(year);
        if books.is_empty() {
            return vec![format!("No books found for year {year}.")];
        }

        let mut lines = Vec::with_capacity(books.len() + 1);
        lines.push(format!("Books from {year}:"));
        lines.extend(books.iter().map(ToString::to_string));
        lines
    }
}

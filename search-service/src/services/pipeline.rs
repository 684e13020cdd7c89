//! Result shaping for a search.
//!
//! Candidates from the catalog flow through five stages in a fixed order:
//! term filter, year filter, sort, limit, pagination. Each stage takes the
//! previous stage's books by value and hands back a new sequence, so any
//! stage can be exercised on its own.

use crate::models::{Book, Pagination, QuerySpec, SortOrder, YearFilter};

/// Outcome of the pipeline. `total` counts the books left after limiting;
/// pagination narrows `books` but never changes `total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    pub total: usize,
    pub books: Vec<Book>,
}

pub fn run(spec: &QuerySpec, candidates: Vec<Book>) -> ResultSet {
    let books = filter_by_term(candidates, &spec.term);
    let books = filter_by_year(books, &spec.year_filter);
    let books = sort_books(books, spec.sort_order);
    let books = apply_limit(books, spec.limit);
    paginate(books, spec.pagination)
}

/// Keeps books whose title contains `term`, ignoring case.
///
/// The catalog's own matching is loose and returns titles that do not
/// literally contain the term.
pub fn filter_by_term(books: Vec<Book>, term: &str) -> Vec<Book> {
    let term = term.to_lowercase();
    books
        .into_iter()
        .filter(|book| book.title.to_lowercase().contains(&term))
        .collect()
}

pub fn filter_by_year(books: Vec<Book>, filter: &YearFilter) -> Vec<Book> {
    if filter.is_none() {
        return books;
    }
    books
        .into_iter()
        .filter(|book| filter.matches(book.release_year))
        .collect()
}

/// Stable sort: books with equal keys keep their incoming order.
pub fn sort_books(mut books: Vec<Book>, order: SortOrder) -> Vec<Book> {
    match order {
        SortOrder::Alphabetical => books.sort_by_cached_key(|book| book.title.to_lowercase()),
        SortOrder::Ascending => books.sort_by_key(|book| book.release_year),
        SortOrder::Descending => books.sort_by(|a, b| b.release_year.cmp(&a.release_year)),
    }
    books
}

/// Keeps the first `limit` books. A limit at or above the count is a no-op.
pub fn apply_limit(mut books: Vec<Book>, limit: Option<usize>) -> Vec<Book> {
    if let Some(limit) = limit {
        books.truncate(limit);
    }
    books
}

/// Cuts one page out of `books`.
///
/// A page past the end yields the single empty-page marker instead of an
/// error. With no results at all there is nothing to page through and the
/// empty list is returned as-is.
pub fn paginate(books: Vec<Book>, pagination: Option<Pagination>) -> ResultSet {
    let total = books.len();

    let Some(Pagination { page, page_size }) = pagination else {
        return ResultSet { total, books };
    };
    if total == 0 {
        return ResultSet { total, books };
    }

    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= total {
        return ResultSet {
            total,
            books: vec![Book::empty_page()],
        };
    }

    let end = start.saturating_add(page_size).min(total);
    let books = books.into_iter().skip(start).take(end - start).collect();
    ResultSet { total, books }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::EMPTY_PAGE_TITLE;

    fn book(title: &str, year: i32) -> Book {
        Book {
            title: title.to_string(),
            authors: vec!["Frank Herbert".to_string()],
            release_year: year,
            languages: vec!["eng".to_string()],
        }
    }

    fn dune_catalog() -> Vec<Book> {
        vec![
            book("Dune", 1965),
            book("Dune Messiah", 1969),
            book("Children of Dune", 1976),
            book("Heretics of Dune", 1984),
            book("Dune: House Atreides", 1999),
            book("Dune: The Graphic Novel", 2021),
        ]
    }

    fn numbered(count: usize) -> Vec<Book> {
        (0..count)
            .map(|i| book(&format!("Book {i:02}"), 1900 + i as i32))
            .collect()
    }

    fn years(books: &[Book]) -> Vec<i32> {
        books.iter().map(|b| b.release_year).collect()
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    // ============================================================
    // TERM FILTER
    // ============================================================

    #[test]
    fn test_term_filter_is_case_insensitive_substring() {
        let books = vec![
            book("DUNE", 1965),
            book("Children of Dune", 1976),
            book("Dunes of the Sahara", 1990),
            book("The Sand Book", 2000),
        ];

        let kept = filter_by_term(books, "dune");

        assert_eq!(
            titles(&kept),
            vec!["DUNE", "Children of Dune", "Dunes of the Sahara"]
        );
        for b in &kept {
            assert!(b.title.to_lowercase().contains("dune"));
        }
    }

    #[test]
    fn test_term_filter_drops_loose_upstream_matches() {
        let books = vec![book("Frank Herbert: A Biography", 2003)];

        assert!(filter_by_term(books, "dune").is_empty());
    }

    // ============================================================
    // YEAR FILTER
    // ============================================================

    #[test]
    fn test_year_filter_range_keeps_bounds() {
        let kept = filter_by_year(dune_catalog(), &YearFilter::range(1969, 1984));

        assert_eq!(years(&kept), vec![1969, 1976, 1984]);
    }

    #[test]
    fn test_year_filter_single_less() {
        let kept = filter_by_year(dune_catalog(), &YearFilter::single("<", 1976));

        assert_eq!(years(&kept), vec![1965, 1969]);
    }

    #[test]
    fn test_year_filter_none_passes_through() {
        let kept = filter_by_year(dune_catalog(), &YearFilter::None);

        assert_eq!(kept, dune_catalog());
    }

    // ============================================================
    // SORT
    // ============================================================

    #[test]
    fn test_sort_ascending_and_descending() {
        let shuffled = vec![
            book("Dune 3", 1976),
            book("Dune 1", 1965),
            book("Dune 2", 1969),
        ];

        let asc = sort_books(shuffled.clone(), SortOrder::Ascending);
        let desc = sort_books(shuffled, SortOrder::Descending);

        assert_eq!(years(&asc), vec![1965, 1969, 1976]);
        assert_eq!(years(&desc), vec![1976, 1969, 1965]);
    }

    #[test]
    fn test_sort_alphabetical_ignores_case() {
        let books = vec![
            book("heretics of Dune", 1984),
            book("Children of Dune", 1976),
            book("dune", 1965),
        ];

        let sorted = sort_books(books, SortOrder::Alphabetical);

        assert_eq!(
            titles(&sorted),
            vec!["Children of Dune", "dune", "heretics of Dune"]
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let books = vec![
            book("First", 1970),
            book("Second", 1960),
            book("Third", 1970),
            book("Fourth", 1960),
        ];

        let asc = sort_books(books.clone(), SortOrder::Ascending);
        let desc = sort_books(books, SortOrder::Descending);

        assert_eq!(titles(&asc), vec!["Second", "Fourth", "First", "Third"]);
        assert_eq!(titles(&desc), vec!["First", "Third", "Second", "Fourth"]);
    }

    #[test]
    fn test_sort_alphabetical_is_stable_on_equal_titles() {
        let books = vec![book("Dune", 2000), book("DUNE", 1965), book("dune", 1984)];

        let sorted = sort_books(books, SortOrder::Alphabetical);

        assert_eq!(years(&sorted), vec![2000, 1965, 1984]);
    }

    // ============================================================
    // LIMIT
    // ============================================================

    #[test]
    fn test_limit_truncates() {
        let limited = apply_limit(numbered(8), Some(3));

        assert_eq!(titles(&limited), vec!["Book 00", "Book 01", "Book 02"]);
    }

    #[test]
    fn test_limit_at_or_above_count_is_noop() {
        assert_eq!(apply_limit(numbered(5), Some(5)).len(), 5);
        assert_eq!(apply_limit(numbered(5), Some(50)).len(), 5);
        assert_eq!(apply_limit(numbered(5), None).len(), 5);
    }

    // ============================================================
    // PAGINATION
    // ============================================================

    #[test]
    fn test_second_page_of_twenty_five() {
        let result = paginate(
            numbered(25),
            Some(Pagination {
                page: 2,
                page_size: 10,
            }),
        );

        assert_eq!(result.total, 25);
        assert_eq!(result.books.len(), 10);
        assert_eq!(result.books.first().unwrap().title, "Book 10");
        assert_eq!(result.books.last().unwrap().title, "Book 19");
    }

    #[test]
    fn test_last_partial_page() {
        let result = paginate(
            numbered(25),
            Some(Pagination {
                page: 3,
                page_size: 10,
            }),
        );

        assert_eq!(result.total, 25);
        assert_eq!(titles(&result.books), vec!["Book 20", "Book 21", "Book 22", "Book 23", "Book 24"]);
    }

    #[test]
    fn test_out_of_range_page_gives_marker() {
        let result = paginate(
            numbered(5),
            Some(Pagination {
                page: 99,
                page_size: 10,
            }),
        );

        assert_eq!(result.total, 5);
        assert_eq!(result.books, vec![Book::empty_page()]);
        assert_eq!(result.books[0].title, EMPTY_PAGE_TITLE);
    }

    #[test]
    fn test_page_starting_exactly_at_end_gives_marker() {
        let result = paginate(
            numbered(10),
            Some(Pagination {
                page: 2,
                page_size: 10,
            }),
        );

        assert_eq!(result.total, 10);
        assert_eq!(result.books, vec![Book::empty_page()]);
    }

    #[test]
    fn test_pagination_over_nothing_stays_empty() {
        let result = paginate(
            Vec::new(),
            Some(Pagination {
                page: 3,
                page_size: 10,
            }),
        );

        assert_eq!(result.total, 0);
        assert!(result.books.is_empty());
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let result = paginate(
            numbered(3),
            Some(Pagination {
                page: usize::MAX,
                page_size: usize::MAX,
            }),
        );

        assert_eq!(result.total, 3);
        assert_eq!(result.books, vec![Book::empty_page()]);
    }

    // ============================================================
    // FULL RUN
    // ============================================================

    #[test]
    fn test_run_dune_scenario() {
        let spec = QuerySpec {
            term: "dune".to_string(),
            year_filter: YearFilter::single(">", 1970),
            sort_order: SortOrder::Descending,
            limit: Some(3),
            pagination: None,
        };

        let result = run(&spec, dune_catalog());

        assert_eq!(result.total, 3);
        assert_eq!(years(&result.books), vec![2021, 1999, 1984]);
    }

    #[test]
    fn test_run_total_counts_after_limit_before_page() {
        let spec = QuerySpec {
            limit: Some(4),
            pagination: Some(Pagination {
                page: 2,
                page_size: 3,
            }),
            ..QuerySpec::for_term("book")
        };

        let result = run(&spec, numbered(12));

        assert_eq!(result.total, 4);
        assert_eq!(titles(&result.books), vec!["Book 03"]);
    }

    #[test]
    fn test_run_reversed_range_matches_ordered_range() {
        let reversed = QuerySpec {
            year_filter: YearFilter::range(2000, 1970),
            ..QuerySpec::for_term("dune")
        };
        let ordered = QuerySpec {
            year_filter: YearFilter::range(1970, 2000),
            ..QuerySpec::for_term("dune")
        };

        assert_eq!(run(&reversed, dune_catalog()), run(&ordered, dune_catalog()));
        assert_eq!(years(&run(&ordered, dune_catalog()).books), vec![1976, 1984, 1999]);
    }
}

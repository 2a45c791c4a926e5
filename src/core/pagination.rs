use crate::error::CoreError;
use crate::models::RankedResult;

/// Fixed-size window over a ranked result list.
///
/// Pages are 1-based. A page number past the end yields an empty list, not
/// an error; a zero page size or page number is `InvalidArgument`. Windows
/// never overlap and together reconstitute the full list in order.
pub fn page(
    results: &[RankedResult],
    page_size: usize,
    page_number: usize,
) -> Result<Vec<RankedResult>, CoreError> {
    if page_size == 0 {
        return Err(CoreError::InvalidArgument(
            "page size must be greater than zero".to_string(),
        ));
    }
    if page_number == 0 {
        return Err(CoreError::InvalidArgument(
            "page numbers start at 1".to_string(),
        ));
    }

    let start = (page_number - 1).saturating_mul(page_size);
    if start >= results.len() {
        return Ok(Vec::new());
    }
    let end = (start + page_size).min(results.len());
    Ok(results[start..end].to_vec())
}

/// "Load more" cursor over a ranked result list.
///
/// Owns the list and hands out successive non-overlapping windows.
pub struct Paginator {
    results: Vec<RankedResult>,
    page_size: usize,
    next_page: usize,
}

impl Paginator {
    pub fn new(results: Vec<RankedResult>, page_size: usize) -> Result<Self, CoreError> {
        if page_size == 0 {
            return Err(CoreError::InvalidArgument(
                "page size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            results,
            page_size,
            next_page: 1,
        })
    }

    /// Next window, or `None` once the list is exhausted.
    pub fn next_page(&mut self) -> Option<Vec<RankedResult>> {
        let window = page(&self.results, self.page_size, self.next_page)
            .expect("paginator validated its parameters at construction");
        if window.is_empty() {
            return None;
        }
        self.next_page += 1;
        Some(window)
    }

    pub fn has_more(&self) -> bool {
        (self.next_page - 1).saturating_mul(self.page_size) < self.results.len()
    }

    pub fn total_results(&self) -> usize {
        self.results.len()
    }
}

use crate::models::Meta;

/// First row of the paging block.
pub const PAGING_SEPARATOR: &str = "======================================";

/// Paging summary shown under a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paging {
    pub total: i64,
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl Paging {
    /// Blank or whitespace-only cursors are treated as absent.
    pub fn new(total: i64, next: &str, prev: &str) -> Self {
        Self {
            total,
            next: clean_cursor(next),
            prev: clean_cursor(prev),
        }
    }

    pub fn from_meta(meta: &Meta) -> Self {
        Self::new(meta.total, &meta.links.next, &meta.links.prev)
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }

    /// Command lines that fetch the neighbouring pages of `plans <command>`.
    pub fn navigation_hints(&self, command: &str) -> Vec<String> {
        let mut hints = Vec::new();
        if self.has_next() {
            hints.push(format!("→ Next page: plans {} --cursor {}", command, self.next.as_deref().unwrap_or_default()));
        }
        if self.has_prev() {
            hints.push(format!("← Previous page: plans {} --cursor {}", command, self.prev.as_deref().unwrap_or_default()));
        }
        hints
    }

    /// Separator row, header row, value row.
    pub fn compose(&self) -> Vec<Vec<String>> {
        vec![
            vec![PAGING_SEPARATOR.to_string()],
            vec!["TOTAL".to_string(), "NEXT PAGE".to_string(), "PREV PAGE".to_string()],
            vec![
                self.total.to_string(),
                self.next.clone().unwrap_or_default(),
                self.prev.clone().unwrap_or_default(),
            ],
        ]
    }
}

fn clean_cursor(raw: &str) -> Option<String> {
    let t = raw.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

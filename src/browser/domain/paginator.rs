/// Number of pages needed for `len` items. An empty list still has one page.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Page cursor over a list whose length is supplied on every call, so the
/// same paginator follows whatever subset is currently visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paginator {
    current_page: usize,
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self, len: usize) -> usize {
        page_count(len, self.page_size)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.current_page - 1) * self.page_size).min(items.len());
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self, len: usize) -> bool {
        self.current_page < self.page_count(len)
    }

    pub fn go_prev(&mut self) -> bool {
        if self.can_go_prev() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn go_next(&mut self, len: usize) -> bool {
        if self.can_go_next(len) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn go_first(&mut self) -> bool {
        let moved = self.current_page != 1;
        self.current_page = 1;
        moved
    }

    pub fn go_last(&mut self, len: usize) -> bool {
        let last = self.page_count(len);
        let moved = self.current_page != last;
        self.current_page = last;
        moved
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

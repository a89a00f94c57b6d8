/// Field names passed to `remove` and `prepend_all`, possibly nested.
#[derive(Debug, Clone, Default)]
pub struct KeyList(Vec<String>);

impl KeyList {
    pub fn none() -> Self {
        KeyList(Vec::new())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for KeyList {
    fn from(key: &str) -> Self {
        KeyList(vec![key.to_string()])
    }
}

impl From<String> for KeyList {
    fn from(key: String) -> Self {
        KeyList(vec![key])
    }
}

impl From<()> for KeyList {
    fn from(_: ()) -> Self {
        KeyList::none()
    }
}

impl<T: Into<KeyList>> From<Vec<T>> for KeyList {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<KeyList>, const N: usize> From<[T; N]> for KeyList {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Into<KeyList> + Clone> From<&[T]> for KeyList {
    fn from(items: &[T]) -> Self {
        items.iter().cloned().collect()
    }
}

impl<T: Into<KeyList>> FromIterator<T> for KeyList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        KeyList(iter.into_iter().flat_map(|item| item.into().0).collect())
    }
}

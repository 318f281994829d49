use std::collections::{BTreeMap, HashMap};

/// Convert a value into the text substituted for a placeholder.
pub trait ToTemplateValue {
    fn to_template_value(&self) -> String;
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl ToTemplateValue for $ty {
                fn to_template_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_display!(str, String, char, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: ToTemplateValue + ?Sized> ToTemplateValue for &T {
    fn to_template_value(&self) -> String {
        (**self).to_template_value()
    }
}

impl<T: ToTemplateValue> ToTemplateValue for Option<T> {
    fn to_template_value(&self) -> String {
        match self {
            Some(value) => value.to_template_value(),
            None => "null".into(),
        }
    }
}

impl ToTemplateValue for serde_json::Value {
    fn to_template_value(&self) -> String {
        match self {
            serde_json::Value::String(s) => s.clone(),
            value => value.to_string(),
        }
    }
}

/// Placeholder values, in insertion order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Context {
    values: Vec<(String, String)>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Set a value. Setting the same key again replaces the value but keeps its position.
    pub fn set(&mut self, key: &str, value: impl ToTemplateValue) -> &mut Self {
        let value = value.to_template_value();

        match self.values.iter_mut().find(|(name, _)| name == key) {
            Some(entry) => entry.1 = value,
            None => self.values.push((key.to_string(), value)),
        }

        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl From<&Context> for Context {
    fn from(context: &Context) -> Context {
        context.clone()
    }
}

impl<K: AsRef<str>, V: ToTemplateValue> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Context::new();
        for (key, value) in iter {
            context.set(key.as_ref(), value);
        }
        context
    }
}

impl<K: AsRef<str>, V: ToTemplateValue, const N: usize> From<[(K, V); N]> for Context {
    fn from(values: [(K, V); N]) -> Context {
        values.into_iter().collect()
    }
}

impl<K: AsRef<str>, V: ToTemplateValue> From<Vec<(K, V)>> for Context {
    fn from(values: Vec<(K, V)>) -> Context {
        values.into_iter().collect()
    }
}

impl<K: AsRef<str>, V: ToTemplateValue> From<HashMap<K, V>> for Context {
    fn from(values: HashMap<K, V>) -> Context {
        values.into_iter().collect()
    }
}

impl<K: AsRef<str>, V: ToTemplateValue> From<BTreeMap<K, V>> for Context {
    fn from(values: BTreeMap<K, V>) -> Context {
        values.into_iter().collect()
    }
}

/// Flat JSON objects become contexts, anything else is an empty context.
impl From<serde_json::Value> for Context {
    fn from(value: serde_json::Value) -> Context {
        match value {
            serde_json::Value::Object(map) => map.into_iter().collect(),
            _ => Context::new(),
        }
    }
}

//! Shared parameter infrastructure: the [`Params`] trait, the [`Field`] mapping
//! table, and path template resolution.

use url::Url;

use crate::Error;

/// Where a parameter is transmitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// Substituted into a `:name` placeholder of the path template.
    Path,
    /// Appended to the query string as `key=value`.
    Query,
}

/// One row of a parameter struct's mapping table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub key: &'static str,
    pub location: Location,
    pub required: bool,
    pub value: Option<String>,
}

impl Field {
    /// A required path segment. Empty strings count as unset.
    pub fn path(key: &'static str, value: impl ToString) -> Self {
        Self {
            key,
            location: Location::Path,
            required: true,
            value: non_empty(value.to_string()),
        }
    }

    /// A required query parameter. Empty strings count as unset.
    pub fn required_query(key: &'static str, value: impl ToString) -> Self {
        Self {
            key,
            location: Location::Query,
            required: true,
            value: non_empty(value.to_string()),
        }
    }

    /// An optional query parameter, omitted from the query string when `None`.
    pub fn query<T: ToString>(key: &'static str, value: Option<&T>) -> Self {
        Self {
            key,
            location: Location::Query,
            required: false,
            value: value.map(|v| v.to_string()).and_then(non_empty),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Trait implemented by every request parameter struct.
///
/// Implementations list their fields explicitly, so the mapping between
/// struct fields and transmission keys can be inspected and tested without
/// issuing a request.
pub trait Params {
    /// Returns the mapping table for this parameter set.
    fn fields(&self) -> Vec<Field>;
}

/// Parameterless endpoints (market movers, all quotes).
impl Params for () {
    fn fields(&self) -> Vec<Field> {
        Vec::new()
    }
}

impl<P: Params + ?Sized> Params for &P {
    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }
}

/// A path template with its placeholders substituted and its query pairs collected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// Unescaped path segments, in order.
    pub segments: Vec<String>,
    /// Query pairs, in field declaration order.
    pub query: Vec<(String, String)>,
}

impl ResolvedRequest {
    /// Appends the path segments and query pairs to `base`, escaping each.
    pub fn apply_to(&self, base: &Url) -> Url {
        let mut url = base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(self.segments.iter());
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        url
    }

    /// Renders `/a/b?k=v` relative to the API root, mainly for logging and tests.
    pub fn path_and_query(&self) -> Result<String, Error> {
        let root = Url::parse("http://localhost")?;
        let url = self.apply_to(&root);
        Ok(match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        })
    }
}

/// Substitutes the `:name` placeholders of `template` and collects query pairs.
///
/// Required fields are checked before anything else, so a missing parameter
/// is always reported without touching the network. A placeholder is filled
/// from the field with the same key, whatever its location; only
/// [`Location::Query`] fields are emitted to the query string.
pub fn resolve<P: Params + ?Sized>(template: &str, params: &P) -> Result<ResolvedRequest, Error> {
    let fields = params.fields();

    if let Some(field) = fields.iter().find(|f| f.required && f.value.is_none()) {
        return Err(Error::missing(field.key));
    }

    let mut segments = Vec::new();
    for segment in template.split('/').filter(|s| !s.is_empty()) {
        match segment.strip_prefix(':') {
            Some(name) => {
                let value = fields
                    .iter()
                    .find(|f| f.key == name)
                    .and_then(|f| f.value.clone())
                    .ok_or_else(|| Error::missing(name))?;
                segments.push(value);
            }
            None => segments.push(segment.to_string()),
        }
    }

    let query = fields
        .into_iter()
        .filter(|f| f.location == Location::Query)
        .filter_map(|f| f.value.map(|v| (f.key.to_string(), v)))
        .collect();

    Ok(ResolvedRequest { segments, query })
}

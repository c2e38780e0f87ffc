use {
    http::*,
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
};

/// Structured request parameters.
pub type Parameters = Map<String, Value>;

//
// RequestDescriptor
//

/// Everything about a request that identifies it for caching.
///
/// `params` and `query` are arbitrary structured data. Both are optional when deserializing and
/// default to empty maps.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RequestDescriptor {
    /// HTTP method (any case).
    pub method: String,

    /// URL.
    pub url: String,

    /// Parameters (e.g. a request body).
    #[serde(default)]
    pub params: Parameters,

    /// Query parameters.
    #[serde(default)]
    pub query: Parameters,
}

impl RequestDescriptor {
    /// Constructor.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            params: Default::default(),
            query: Default::default(),
        }
    }

    /// With parameters.
    pub fn with_params(mut self, params: Parameters) -> Self {
        self.params = params;
        self
    }

    /// With query parameters.
    pub fn with_query(mut self, query: Parameters) -> Self {
        self.query = query;
        self
    }

    /// Whether the method is GET, compared case-insensitively.
    pub fn is_get(&self) -> bool {
        self.method.eq_ignore_ascii_case(Method::GET.as_str())
    }
}

//
// DescribeRequest
//

/// Create a [RequestDescriptor] for a request.
pub trait DescribeRequest {
    /// Describe.
    fn describe(&self) -> RequestDescriptor;
}

impl DescribeRequest for RequestDescriptor {
    fn describe(&self) -> RequestDescriptor {
        self.clone()
    }
}

impl<BodyT> DescribeRequest for Request<BodyT> {
    /// The URL excludes the query string, which is decoded into
    /// [query](RequestDescriptor::query) instead. Repeated query keys become arrays.
    ///
    /// The body is not read, so [params](RequestDescriptor::params) is always empty.
    fn describe(&self) -> RequestDescriptor {
        let uri = self.uri();

        let mut url = uri.to_string();
        if let Some(index) = url.find('?') {
            url.truncate(index);
        }

        let query = uri.query().map(decode_query).unwrap_or_default();

        RequestDescriptor::new(self.method().as_str(), url).with_query(query)
    }
}

fn decode_query(query: &str) -> Parameters {
    let mut parameters = Parameters::new();

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let value = Value::String(value.into_owned());
        match parameters.get_mut(&*key) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                parameters.insert(key.into_owned(), value);
            }
        }
    }

    parameters
}

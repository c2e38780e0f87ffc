use std::sync::*;

//
// CacheWeight
//

/// Cache weight.
pub trait CacheWeight {
    /// Cache weight as a byte count.
    ///
    /// It is *not* the amount of memory used, but rather an indicator of *potential* storage
    /// requirements.
    ///
    /// Its intended use is for apples-to-apples comparisons, e.g. to find out which of two items
    /// of the same type weighs more. Sums of weights can be misleading in terms of memory use
    /// because there might be memory shared between items, e.g. via [Arc].
    fn cache_weight(&self) -> usize;
}

impl CacheWeight for String {
    fn cache_weight(&self) -> usize {
        const SELF_SIZE: usize = size_of::<String>();
        SELF_SIZE + self.len()
    }
}

impl CacheWeight for Vec<u8> {
    fn cache_weight(&self) -> usize {
        const SELF_SIZE: usize = size_of::<Vec<u8>>();
        SELF_SIZE + self.len()
    }
}

impl CacheWeight for serde_json::Value {
    fn cache_weight(&self) -> usize {
        const SELF_SIZE: usize = size_of::<serde_json::Value>();

        match self {
            Self::String(string) => SELF_SIZE + string.len(),

            Self::Array(array) => {
                SELF_SIZE + array.iter().map(|value| value.cache_weight()).sum::<usize>()
            }

            Self::Object(object) => {
                let mut size = SELF_SIZE;
                for (key, value) in object {
                    size += key.len() + value.cache_weight();
                }
                size
            }

            _ => SELF_SIZE,
        }
    }
}

impl<InnerT> CacheWeight for Arc<InnerT>
where
    InnerT: CacheWeight,
{
    fn cache_weight(&self) -> usize {
        self.as_ref().cache_weight()
    }
}

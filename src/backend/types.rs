use serde::{Deserialize, Deserializer, Serialize};

/// One offer returned by the search service.
///
/// The backend fills its fields from a shopping engine that occasionally
/// omits values, so missing and `null` fields decode to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}

impl SearchResponse {
    /// Products of the response, treating a missing field as an empty list.
    pub fn into_products(self) -> Vec<Product> {
        self.products.unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub products_context: &'a [Product],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    /// Signed so a negative index from the service decodes and is then
    /// rejected by the catalog range check instead of failing the reply.
    #[serde(default)]
    pub recommended_index: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn product_tolerates_null_and_missing_fields() {
        let product: Product = serde_json::from_str(
            r#"{"title":"Mouse","price":null,"source":"Shop","link":"https://x"}"#,
        )
        .unwrap();

        assert_eq!(
            product,
            Product {
                title: "Mouse".into(),
                price: String::new(),
                source: "Shop".into(),
                link: "https://x".into(),
                thumbnail: String::new(),
                rating: 0.0,
            }
        );
    }

    #[test]
    fn missing_products_field_is_empty() {
        let response: SearchResponse = serde_json::from_str(r#"{"detail":"boom"}"#).unwrap();
        assert!(response.into_products().is_empty());
    }

    #[test]
    fn chat_request_uses_backend_field_names() {
        let products = vec![Product {
            title: "A".into(),
            price: "$10".into(),
            source: "X".into(),
            link: "u".into(),
            thumbnail: "t".into(),
            rating: 4.0,
        }];
        let request = ChatRequest {
            message: "which one?",
            products_context: &products,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["message"], "which one?");
        assert_eq!(value["products_context"][0]["title"], "A");
        assert_eq!(value["products_context"][0]["rating"], 4.0);
    }

    #[test]
    fn chat_response_index_is_optional() {
        let with_null: ChatResponse =
            serde_json::from_str(r#"{"reply":"hmm","recommended_index":null}"#).unwrap();
        let omitted: ChatResponse = serde_json::from_str(r#"{"reply":"hmm"}"#).unwrap();
        let zero: ChatResponse =
            serde_json::from_str(r#"{"reply":"first","recommended_index":0}"#).unwrap();

        assert_eq!(with_null.recommended_index, None);
        assert_eq!(omitted.recommended_index, None);
        assert_eq!(zero.recommended_index, Some(0));
    }
}

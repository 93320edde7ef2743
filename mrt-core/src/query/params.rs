//! Raw warp list parameters

use serde::Deserialize;

/// Query string of `GET /warps`, before validation.
///
/// Every field is optional; an empty value counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WarpQueryParams {
    pub name: Option<String>,
    pub player: Option<String>,
    pub company: Option<String>,
    pub world: Option<String>,
    #[serde(rename = "type")]
    pub warp_type: Option<String>,
    pub order_by: Option<String>,
    pub sort_by: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl WarpQueryParams {
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn player(&self) -> Option<&str> {
        present(&self.player)
    }

    pub fn company(&self) -> Option<&str> {
        present(&self.company)
    }

    pub fn world(&self) -> Option<&str> {
        present(&self.world)
    }

    pub fn warp_type(&self) -> Option<&str> {
        present(&self.warp_type)
    }

    pub fn order_by(&self) -> Option<&str> {
        present(&self.order_by)
    }

    pub fn sort_by(&self) -> Option<&str> {
        present(&self.sort_by)
    }

    pub fn limit(&self) -> Option<&str> {
        present(&self.limit)
    }

    pub fn offset(&self) -> Option<&str> {
        present(&self.offset)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_absent() {
        let params = WarpQueryParams {
            name: Some(String::new()),
            limit: Some("5".to_string()),
            ..Default::default()
        };

        assert_eq!(params.name(), None);
        assert_eq!(params.limit(), Some("5"));
        assert_eq!(params.offset(), None);
    }
}

use super::{
    a001_product, a002_category, a003_sizes, a004_colors, a005_discount, a006_faq, a007_contact,
    a008_team, a009_news,
};
use crate::shared::envelope::ListShape;
use crate::shared::metadata::EntitySchema;

/// Backend collections managed by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Product,
    Category,
    Sizes,
    Colors,
    Discount,
    Faq,
    Contact,
    Team,
    News,
}

impl ResourceKind {
    /// Sidebar order
    pub const ALL: [ResourceKind; 9] = [
        Self::Product,
        Self::Category,
        Self::Discount,
        Self::Sizes,
        Self::Colors,
        Self::Faq,
        Self::Contact,
        Self::Team,
        Self::News,
    ];

    /// Collection segment under `/api`
    pub fn collection_name(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Category => "category",
            Self::Sizes => "sizes",
            Self::Colors => "colors",
            Self::Discount => "discount",
            Self::Faq => "faq",
            Self::Contact => "contact",
            Self::Team => "team-section",
            Self::News => "news",
        }
    }

    pub fn collection_path(&self) -> String {
        format!("/api/{}", self.collection_name())
    }

    pub fn item_path(&self, id: i64) -> String {
        format!("/api/{}/{}", self.collection_name(), id)
    }

    /// Products come wrapped as `{ data: { products: [...] } }`
    pub fn list_shape(&self) -> ListShape {
        match self {
            Self::Product => ListShape::Nested("products"),
            _ => ListShape::Flat,
        }
    }

    /// Sidebar label
    pub fn nav_label(&self) -> &'static str {
        match self {
            Self::Product => "Products",
            Self::Category => "Category",
            Self::Sizes => "Sizes",
            Self::Colors => "Colors",
            Self::Discount => "Discount",
            Self::Faq => "Faq",
            Self::Contact => "Contact",
            Self::Team => "Team",
            Self::News => "News",
        }
    }

    /// Console route of the resource page
    pub fn route(&self) -> &'static str {
        match self {
            Self::Product => "/",
            Self::Category => "/category",
            Self::Sizes => "/sizes",
            Self::Colors => "/colors",
            Self::Discount => "/discount",
            Self::Faq => "/faq",
            Self::Contact => "/contact",
            Self::Team => "/team-members",
            Self::News => "/news",
        }
    }

    pub fn schema(&self) -> &'static EntitySchema {
        match self {
            Self::Product => &a001_product::SCHEMA,
            Self::Category => &a002_category::SCHEMA,
            Self::Sizes => &a003_sizes::SCHEMA,
            Self::Colors => &a004_colors::SCHEMA,
            Self::Discount => &a005_discount::SCHEMA,
            Self::Faq => &a006_faq::SCHEMA,
            Self::Contact => &a007_contact::SCHEMA,
            Self::Team => &a008_team::SCHEMA,
            Self::News => &a009_news::SCHEMA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::{FieldEncoding, Transport};

    #[test]
    fn test_schemas_match_their_resource() {
        for kind in ResourceKind::ALL {
            let schema = kind.schema();
            assert_eq!(schema.resource, kind);
            assert!(!schema.fields.is_empty(), "{:?}", kind);
            assert!(!schema.columns.is_empty(), "{:?}", kind);
        }
    }

    #[test]
    fn test_routes_are_unique() {
        let mut routes: Vec<_> = ResourceKind::ALL.iter().map(|k| k.route()).collect();
        routes.sort_unstable();
        routes.dedup();
        assert_eq!(routes.len(), ResourceKind::ALL.len());
    }

    #[test]
    fn test_multipart_iff_files() {
        for kind in ResourceKind::ALL {
            let schema = kind.schema();
            assert_eq!(
                schema.transport == Transport::Multipart,
                schema.has_files(),
                "{:?}",
                kind
            );
            if schema.transport == Transport::Json {
                assert!(schema
                    .fields
                    .iter()
                    .all(|f| f.encoding != FieldEncoding::Binary));
            }
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(ResourceKind::Team.collection_path(), "/api/team-section");
        assert_eq!(ResourceKind::Sizes.item_path(4), "/api/sizes/4");
        assert_eq!(ResourceKind::Product.list_shape(), ListShape::Nested("products"));
    }
}

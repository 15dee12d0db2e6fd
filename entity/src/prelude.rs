pub use super::customer_order::Entity as CustomerOrder;
pub use super::delivery_location::Entity as DeliveryLocation;
pub use super::order_item::Entity as OrderItem;
pub use super::partner::Entity as Partner;
pub use super::product::Entity as Product;
pub use super::user::Entity as User;

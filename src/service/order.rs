//! Order engine: composition validation, totals, and lifecycle

use crate::domain::order::{round2, CreateOrderInput, Order, OrderItem, OrderStatus};
use crate::domain::Role;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::policy;
use crate::repository::{MenuItemRepository, OrderFilter, OrderRepository, RestaurantRepository};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct OrderService<O, M, R>
where
    O: OrderRepository,
    M: MenuItemRepository,
    R: RestaurantRepository,
{
    order_repo: Arc<O>,
    menu_item_repo: Arc<M>,
    restaurant_repo: Arc<R>,
}

impl<O, M, R> OrderService<O, M, R>
where
    O: OrderRepository,
    M: MenuItemRepository,
    R: RestaurantRepository,
{
    pub fn new(order_repo: Arc<O>, menu_item_repo: Arc<M>, restaurant_repo: Arc<R>) -> Self {
        Self {
            order_repo,
            menu_item_repo,
            restaurant_repo,
        }
    }

    /// Create an order from the requested lines.
    ///
    /// Each line is validated against the catalog: the menu item must exist,
    /// be available, and belong to a restaurant the caller's country may
    /// see. The item name is snapshotted from the catalog, but the unit
    /// price is taken from the caller as-is; the engine does not re-price.
    pub async fn create(&self, auth: &AuthUser, input: CreateOrderInput) -> Result<Order> {
        input.validate()?;

        let mut items = Vec::with_capacity(input.items.len());
        let mut total_amount = 0.0;

        for line in &input.items {
            let menu_item = self
                .menu_item_repo
                .find_by_id(&line.menu_item_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Menu item {} not found", line.menu_item_id))
                })?;

            if !menu_item.is_available {
                return Err(AppError::BadRequest(format!(
                    "{} is not available",
                    menu_item.name
                )));
            }

            let restaurant = self
                .restaurant_repo
                .find_by_id(&menu_item.restaurant_id)
                .await?
                .ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!(
                        "Menu item {} references missing restaurant {}",
                        menu_item.id,
                        menu_item.restaurant_id
                    ))
                })?;

            if !policy::country_visible(auth, restaurant.country) {
                return Err(AppError::Forbidden(
                    "Cannot order from restaurants outside your country".to_string(),
                ));
            }

            items.push(OrderItem {
                id: Uuid::new_v4().to_string(),
                menu_item_id: line.menu_item_id.clone(),
                menu_item_name: menu_item.name,
                quantity: line.quantity,
                price: line.price,
            });
            total_amount += line.price * f64::from(line.quantity);
        }

        let order = Order {
            id: Uuid::new_v4().to_string(),
            user_id: auth.user_id.clone(),
            user_name: auth.username.clone(),
            order_date: Utc::now(),
            total_amount: round2(total_amount),
            status: OrderStatus::Pending,
            payment_method_id: input.payment_method_id,
            country: auth.country,
            items,
        };
        self.order_repo.insert(&order).await?;

        Ok(order)
    }

    /// List orders in the caller's scope, most recent first:
    /// ADMIN all, MANAGER own country, MEMBER own orders.
    pub async fn list(&self, auth: &AuthUser) -> Result<Vec<Order>> {
        let filter = match auth.role {
            Role::Admin => OrderFilter::All,
            Role::Manager => OrderFilter::Country(auth.country),
            Role::Member => OrderFilter::User(auth.user_id.clone()),
        };
        self.order_repo.list(filter).await
    }

    /// Fetch one order, applying the caller's visibility rules
    pub async fn get(&self, auth: &AuthUser, id: &str) -> Result<Order> {
        let order = self.find(id).await?;

        if auth.role == Role::Member && order.user_id != auth.user_id {
            return Err(AppError::Forbidden(
                "Access denied to this order".to_string(),
            ));
        }
        if auth.role == Role::Manager && order.country != auth.country {
            return Err(AppError::Forbidden(
                "Access denied to this order".to_string(),
            ));
        }

        Ok(order)
    }

    /// Complete a pending order. Managers may only check out orders from
    /// their own country.
    pub async fn checkout(&self, auth: &AuthUser, id: &str) -> Result<Order> {
        let order = self.find(id).await?;

        if order.status != OrderStatus::Pending {
            return Err(AppError::BadRequest(
                "Order is not in pending status".to_string(),
            ));
        }

        if auth.role == Role::Manager && order.country != auth.country {
            return Err(AppError::Forbidden(
                "Cannot checkout orders from other countries".to_string(),
            ));
        }

        self.order_repo
            .update_status(id, OrderStatus::Completed)
            .await
    }

    /// Cancel an order. Only an already-cancelled order is rejected; a
    /// completed order can still be cancelled.
    pub async fn cancel(&self, auth: &AuthUser, id: &str) -> Result<Order> {
        let order = self.find(id).await?;

        if order.status == OrderStatus::Cancelled {
            return Err(AppError::BadRequest(
                "Order is already cancelled".to_string(),
            ));
        }

        if auth.role == Role::Manager && order.country != auth.country {
            return Err(AppError::Forbidden(
                "Cannot cancel orders from other countries".to_string(),
            ));
        }

        self.order_repo
            .update_status(id, OrderStatus::Cancelled)
            .await
    }

    async fn find(&self, id: &str) -> Result<Order> {
        self.order_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderItemInput;
    use crate::domain::{Country, MenuItem, Restaurant};
    use crate::repository::menu_item::MockMenuItemRepository;
    use crate::repository::order::MockOrderRepository;
    use crate::repository::restaurant::MockRestaurantRepository;
    use crate::repository::{
        MemoryMenuItemRepository, MemoryOrderRepository, MemoryRestaurantRepository,
    };
    use pretty_assertions::assert_eq;

    fn auth(role: Role, country: Country) -> AuthUser {
        AuthUser {
            user_id: format!("u-{}", role.as_str().to_lowercase()),
            username: role.as_str().to_lowercase(),
            role,
            country,
        }
    }

    fn restaurant(id: &str, country: Country) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: format!("Restaurant {id}"),
            location: "somewhere".to_string(),
            country,
            cuisine_type: "Fusion".to_string(),
            image_url: None,
            rating: 4.5,
        }
    }

    fn menu_item(id: &str, restaurant_id: &str, price: f64, available: bool) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            restaurant_id: restaurant_id.to_string(),
            name: format!("Dish {id}"),
            description: "A dish".to_string(),
            price,
            category: "Main Course".to_string(),
            image_url: None,
            is_available: available,
        }
    }

    fn line(menu_item_id: &str, quantity: u32, price: f64) -> OrderItemInput {
        OrderItemInput {
            menu_item_id: menu_item_id.to_string(),
            quantity,
            price,
        }
    }

    async fn service() -> OrderService<
        MemoryOrderRepository,
        MemoryMenuItemRepository,
        MemoryRestaurantRepository,
    > {
        let restaurant_repo = Arc::new(MemoryRestaurantRepository::new());
        restaurant_repo
            .insert(&restaurant("r-in", Country::India))
            .await
            .unwrap();
        restaurant_repo
            .insert(&restaurant("r-us", Country::America))
            .await
            .unwrap();

        let menu_item_repo = Arc::new(MemoryMenuItemRepository::new());
        menu_item_repo
            .insert(&menu_item("m-curry", "r-in", 350.0, true))
            .await
            .unwrap();
        menu_item_repo
            .insert(&menu_item("m-naan", "r-in", 60.0, true))
            .await
            .unwrap();
        menu_item_repo
            .insert(&menu_item("m-gone", "r-in", 80.0, false))
            .await
            .unwrap();
        menu_item_repo
            .insert(&menu_item("m-burger", "r-us", 12.99, true))
            .await
            .unwrap();

        OrderService::new(
            Arc::new(MemoryOrderRepository::new()),
            menu_item_repo,
            restaurant_repo,
        )
    }

    #[tokio::test]
    async fn test_create_computes_rounded_total() {
        let service = service().await;
        let member = auth(Role::Member, Country::India);

        let order = service
            .create(
                &member,
                CreateOrderInput {
                    items: vec![line("m-curry", 1, 350.0), line("m-naan", 2, 60.0)],
                    payment_method_id: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(order.total_amount, 470.0);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.country, Country::India);
        assert_eq!(order.user_name, "member");
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].menu_item_name, "Dish m-curry");
    }

    #[tokio::test]
    async fn test_create_trusts_caller_price() {
        // The catalog price is 350; the caller claims 1. Current behavior
        // keeps the caller's price, so the total follows it.
        let service = service().await;
        let member = auth(Role::Member, Country::India);

        let order = service
            .create(
                &member,
                CreateOrderInput {
                    items: vec![line("m-curry", 3, 1.0)],
                    payment_method_id: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(order.total_amount, 3.0);
    }

    #[tokio::test]
    async fn test_create_unavailable_item_rejected() {
        let service = service().await;
        let member = auth(Role::Member, Country::India);

        let err = service
            .create(
                &member,
                CreateOrderInput {
                    items: vec![line("m-gone", 1, 80.0)],
                    payment_method_id: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(err.to_string().contains("is not available"));
    }

    #[tokio::test]
    async fn test_create_foreign_restaurant_forbidden() {
        let service = service().await;
        let member = auth(Role::Member, Country::India);

        let err = service
            .create(
                &member,
                CreateOrderInput {
                    items: vec![line("m-burger", 1, 12.99)],
                    payment_method_id: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_create_admin_crosses_countries() {
        let service = service().await;
        let admin = auth(Role::Admin, Country::India);

        let order = service
            .create(
                &admin,
                CreateOrderInput {
                    items: vec![line("m-burger", 2, 12.99)],
                    payment_method_id: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(order.total_amount, 25.98);
        // The order's country is a snapshot of the user, not the restaurant
        assert_eq!(order.country, Country::India);
    }

    #[tokio::test]
    async fn test_create_missing_item_not_found() {
        let mut menu_item_repo = MockMenuItemRepository::new();
        menu_item_repo
            .expect_find_by_id()
            .returning(|_| Ok(None));

        let service = OrderService::new(
            Arc::new(MockOrderRepository::new()),
            Arc::new(menu_item_repo),
            Arc::new(MockRestaurantRepository::new()),
        );

        let err = service
            .create(
                &auth(Role::Member, Country::India),
                CreateOrderInput {
                    items: vec![line("ghost", 1, 5.0)],
                    payment_method_id: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains("Menu item ghost not found"));
    }

    #[tokio::test]
    async fn test_lifecycle_checkout_then_checkout_rejected() {
        let service = service().await;
        let member = auth(Role::Member, Country::India);
        let admin = auth(Role::Admin, Country::America);

        let order = service
            .create(
                &member,
                CreateOrderInput {
                    items: vec![line("m-curry", 1, 350.0)],
                    payment_method_id: None,
                },
            )
            .await
            .unwrap();

        let completed = service.checkout(&admin, &order.id).await.unwrap();
        assert_eq!(completed.status, OrderStatus::Completed);

        let err = service.checkout(&admin, &order.id).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(err.to_string().contains("not in pending status"));
    }

    #[tokio::test]
    async fn test_cancel_completed_order_allowed() {
        // Known gap preserved from the existing behavior: a completed order
        // can still be cancelled.
        let service = service().await;
        let member = auth(Role::Member, Country::India);
        let admin = auth(Role::Admin, Country::America);

        let order = service
            .create(
                &member,
                CreateOrderInput {
                    items: vec![line("m-curry", 1, 350.0)],
                    payment_method_id: None,
                },
            )
            .await
            .unwrap();

        service.checkout(&admin, &order.id).await.unwrap();
        let cancelled = service.cancel(&admin, &order.id).await.unwrap();
        assert_eq!(cancelled.status, OrderStatus::Cancelled);
    }

    #[tokio::test]
    async fn test_cancel_already_cancelled_rejected() {
        let service = service().await;
        let member = auth(Role::Member, Country::India);
        let admin = auth(Role::Admin, Country::America);

        let order = service
            .create(
                &member,
                CreateOrderInput {
                    items: vec![line("m-naan", 1, 60.0)],
                    payment_method_id: None,
                },
            )
            .await
            .unwrap();

        service.cancel(&admin, &order.id).await.unwrap();
        let err = service.cancel(&admin, &order.id).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(err.to_string().contains("already cancelled"));
    }

    #[tokio::test]
    async fn test_manager_cannot_checkout_foreign_order() {
        let service = service().await;
        let member = auth(Role::Member, Country::India);
        let us_manager = auth(Role::Manager, Country::America);

        let order = service
            .create(
                &member,
                CreateOrderInput {
                    items: vec![line("m-curry", 1, 350.0)],
                    payment_method_id: None,
                },
            )
            .await
            .unwrap();

        let err = service.checkout(&us_manager, &order.id).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_visibility_scopes() {
        let service = service().await;
        let in_member = auth(Role::Member, Country::India);
        let us_admin = auth(Role::Admin, Country::America);

        let input = || CreateOrderInput {
            items: vec![line("m-curry", 1, 350.0)],
            payment_method_id: None,
        };
        let member_order = service.create(&in_member, input()).await.unwrap();
        let admin_order = service.create(&us_admin, input()).await.unwrap();

        // MEMBER: own orders only
        let mine = service.list(&in_member).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, member_order.id);

        // MANAGER: own country only
        let in_manager = auth(Role::Manager, Country::India);
        let managed = service.list(&in_manager).await.unwrap();
        assert_eq!(managed.len(), 1);
        assert_eq!(managed[0].id, member_order.id);

        // ADMIN: everything
        let all = service.list(&us_admin).await.unwrap();
        assert_eq!(all.len(), 2);

        // MEMBER cannot fetch another user's order
        let err = service.get(&in_member, &admin_order.id).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));

        // MANAGER cannot fetch a foreign-country order
        let err = service.get(&in_manager, &admin_order.id).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_get_missing_order() {
        let service = service().await;
        let err = service
            .get(&auth(Role::Admin, Country::India), "ghost")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}

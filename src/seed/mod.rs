//! Startup data seeding
//!
//! Populates the document store with the reference data set: six users
//! across the three roles and two countries, ten restaurants (five per
//! country) with their menus, and a couple of stored payment methods.
//! Skips entirely when users already exist.

use crate::crypto::hash_password;
use crate::domain::user::UserRecord;
use crate::domain::{Country, MenuItem, PaymentMethod, PaymentMethodType, Restaurant, Role};
use crate::error::Result;
use crate::repository::{
    MenuItemRepository, PaymentMethodRepository, RestaurantRepository, UserRepository,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

struct SeedUser {
    username: &'static str,
    password: &'static str,
    full_name: &'static str,
    role: Role,
    country: Country,
}

const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        username: "nickfury",
        password: "admin123",
        full_name: "Nick Fury",
        role: Role::Admin,
        country: Country::America,
    },
    SeedUser {
        username: "captainmarvel",
        password: "manager123",
        full_name: "Captain Marvel",
        role: Role::Manager,
        country: Country::India,
    },
    SeedUser {
        username: "captainamerica",
        password: "manager123",
        full_name: "Captain America",
        role: Role::Manager,
        country: Country::America,
    },
    SeedUser {
        username: "thanos",
        password: "member123",
        full_name: "Thanos",
        role: Role::Member,
        country: Country::India,
    },
    SeedUser {
        username: "thor",
        password: "member123",
        full_name: "Thor",
        role: Role::Member,
        country: Country::India,
    },
    SeedUser {
        username: "travis",
        password: "member123",
        full_name: "Travis",
        role: Role::Member,
        country: Country::America,
    },
];

struct SeedRestaurant {
    name: &'static str,
    location: &'static str,
    country: Country,
    cuisine_type: &'static str,
    image_url: &'static str,
    rating: f64,
}

const SEED_RESTAURANTS: &[SeedRestaurant] = &[
    // India
    SeedRestaurant {
        name: "Spice Garden",
        location: "Mumbai, India",
        country: Country::India,
        cuisine_type: "Indian",
        image_url: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=400",
        rating: 4.5,
    },
    SeedRestaurant {
        name: "Tandoor Palace",
        location: "Delhi, India",
        country: Country::India,
        cuisine_type: "North Indian",
        image_url: "https://images.unsplash.com/photo-1552566626-52f8b828add9?w=400",
        rating: 4.7,
    },
    SeedRestaurant {
        name: "Curry House",
        location: "Bangalore, India",
        country: Country::India,
        cuisine_type: "South Indian",
        image_url: "https://images.unsplash.com/photo-1514933651103-005eec06c04b?w=400",
        rating: 4.3,
    },
    SeedRestaurant {
        name: "Biryani Junction",
        location: "Hyderabad, India",
        country: Country::India,
        cuisine_type: "Hyderabadi",
        image_url: "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=400",
        rating: 4.8,
    },
    SeedRestaurant {
        name: "Masala Magic",
        location: "Pune, India",
        country: Country::India,
        cuisine_type: "Multi-cuisine",
        image_url: "https://images.unsplash.com/photo-1555939594-58d7cb561ad1?w=400",
        rating: 4.4,
    },
    // America
    SeedRestaurant {
        name: "The Burger Joint",
        location: "New York, USA",
        country: Country::America,
        cuisine_type: "American",
        image_url: "https://images.unsplash.com/photo-1550547660-d9450f859349?w=400",
        rating: 4.6,
    },
    SeedRestaurant {
        name: "Pizza Paradise",
        location: "Chicago, USA",
        country: Country::America,
        cuisine_type: "Italian",
        image_url: "https://images.unsplash.com/photo-1513104890138-7c749659a591?w=400",
        rating: 4.7,
    },
    SeedRestaurant {
        name: "Steakhouse Deluxe",
        location: "Texas, USA",
        country: Country::America,
        cuisine_type: "Steakhouse",
        image_url: "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=400",
        rating: 4.9,
    },
    SeedRestaurant {
        name: "Taco Fiesta",
        location: "Los Angeles, USA",
        country: Country::America,
        cuisine_type: "Mexican",
        image_url: "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=400",
        rating: 4.5,
    },
    SeedRestaurant {
        name: "Seafood Bay",
        location: "Seattle, USA",
        country: Country::America,
        cuisine_type: "Seafood",
        image_url: "https://images.unsplash.com/photo-1559339352-11d035aa65de?w=400",
        rating: 4.8,
    },
];

struct SeedDish {
    name: &'static str,
    description: &'static str,
    price: f64,
    category: &'static str,
}

const SPICE_GARDEN_MENU: &[SeedDish] = &[
    SeedDish {
        name: "Butter Chicken",
        description: "Creamy tomato-based curry with tender chicken",
        price: 350.0,
        category: "Main Course",
    },
    SeedDish {
        name: "Paneer Tikka",
        description: "Grilled cottage cheese with spices",
        price: 280.0,
        category: "Appetizer",
    },
    SeedDish {
        name: "Garlic Naan",
        description: "Soft bread with garlic and butter",
        price: 60.0,
        category: "Breads",
    },
    SeedDish {
        name: "Mango Lassi",
        description: "Sweet yogurt drink with mango",
        price: 80.0,
        category: "Beverages",
    },
];

const BURGER_JOINT_MENU: &[SeedDish] = &[
    SeedDish {
        name: "Classic Beef Burger",
        description: "Juicy beef patty with lettuce, tomato, and cheese",
        price: 12.99,
        category: "Burgers",
    },
    SeedDish {
        name: "Chicken Wings",
        description: "Crispy wings with BBQ sauce",
        price: 9.99,
        category: "Appetizer",
    },
    SeedDish {
        name: "French Fries",
        description: "Crispy golden fries",
        price: 4.99,
        category: "Sides",
    },
    SeedDish {
        name: "Coke",
        description: "Refreshing cola",
        price: 2.99,
        category: "Beverages",
    },
];

const DEFAULT_MENU: &[SeedDish] = &[
    SeedDish {
        name: "Special Dish",
        description: "Chef's special",
        price: 15.99,
        category: "Main Course",
    },
    SeedDish {
        name: "Appetizer",
        description: "Starter dish",
        price: 7.99,
        category: "Appetizer",
    },
    SeedDish {
        name: "Dessert",
        description: "Sweet ending",
        price: 6.99,
        category: "Dessert",
    },
];

fn menu_for(restaurant_name: &str) -> &'static [SeedDish] {
    match restaurant_name {
        "Spice Garden" => SPICE_GARDEN_MENU,
        "The Burger Joint" => BURGER_JOINT_MENU,
        _ => DEFAULT_MENU,
    }
}

/// Seed the store with reference data. Idempotent: does nothing when users
/// already exist.
pub async fn seed_database<U, R, M, P>(
    users: &U,
    restaurants: &R,
    menu_items: &M,
    payment_methods: &P,
) -> Result<()>
where
    U: UserRepository,
    R: RestaurantRepository,
    M: MenuItemRepository,
    P: PaymentMethodRepository,
{
    if users.count().await? > 0 {
        info!("Store already seeded, skipping");
        return Ok(());
    }

    info!("Seeding store...");

    let mut seeded_user_ids = Vec::with_capacity(SEED_USERS.len());
    for seed in SEED_USERS {
        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            username: seed.username.to_string(),
            password_hash: hash_password(seed.password)?,
            full_name: seed.full_name.to_string(),
            role: seed.role,
            country: seed.country,
            created_at: Utc::now(),
        };
        users.insert(&record).await?;
        seeded_user_ids.push(record.id);
    }
    info!("Seeded {} users", SEED_USERS.len());

    let mut item_count = 0;
    for seed in SEED_RESTAURANTS {
        let restaurant = Restaurant {
            id: Uuid::new_v4().to_string(),
            name: seed.name.to_string(),
            location: seed.location.to_string(),
            country: seed.country,
            cuisine_type: seed.cuisine_type.to_string(),
            image_url: Some(seed.image_url.to_string()),
            rating: seed.rating,
        };
        restaurants.insert(&restaurant).await?;

        for dish in menu_for(seed.name) {
            menu_items
                .insert(&MenuItem {
                    id: Uuid::new_v4().to_string(),
                    restaurant_id: restaurant.id.clone(),
                    name: dish.name.to_string(),
                    description: dish.description.to_string(),
                    price: dish.price,
                    category: dish.category.to_string(),
                    image_url: None,
                    is_available: true,
                })
                .await?;
            item_count += 1;
        }
    }
    info!(
        "Seeded {} restaurants and {} menu items",
        SEED_RESTAURANTS.len(),
        item_count
    );

    // Stored payment references for Nick Fury and Captain Marvel
    payment_methods
        .insert(&PaymentMethod {
            id: Uuid::new_v4().to_string(),
            user_id: seeded_user_ids[0].clone(),
            method_type: PaymentMethodType::CreditCard,
            card_last4: Some("4242".to_string()),
            cardholder_name: Some("Nick Fury".to_string()),
            is_default: true,
            created_at: Utc::now(),
        })
        .await?;
    payment_methods
        .insert(&PaymentMethod {
            id: Uuid::new_v4().to_string(),
            user_id: seeded_user_ids[1].clone(),
            method_type: PaymentMethodType::Upi,
            card_last4: None,
            cardholder_name: Some("Captain Marvel".to_string()),
            is_default: true,
            created_at: Utc::now(),
        })
        .await?;
    info!("Seeded 2 payment methods");

    info!("Store seeding completed");
    Ok(())
}

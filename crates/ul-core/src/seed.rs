//! Built-in data used when storage holds nothing yet.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Author, Category, Profile, Recommendation, Service};

fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, date)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// The three starter posts shown on a fresh install.
pub fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: "1".into(),
            title: "Best Coffee in Downtown".into(),
            category: Category::Food,
            description: "Amazing espresso and cozy atmosphere. Perfect spot for remote work!".into(),
            location: "Downtown District".into(),
            author: Author::Profile(Profile::new("Sarah Chen", "/diverse-woman-portrait.png")),
            author_avatar: None,
            rating: 4.8,
            image: "/cozy-coffee-shop.png".into(),
            created_at: day(2025, 1, 15),
        },
        Recommendation {
            id: "2".into(),
            title: "Hidden Gem: Riverside Park".into(),
            category: Category::Parks,
            description: "Peaceful walking trails with stunning river views. Great for morning jogs.".into(),
            location: "Riverside".into(),
            author: Author::Profile(Profile::new("Mike Johnson", "/man.jpg")),
            author_avatar: None,
            rating: 4.9,
            image: "/park-with-river.jpg".into(),
            created_at: day(2025, 1, 14),
        },
        Recommendation {
            id: "3".into(),
            title: "Affordable Yoga Studio".into(),
            category: Category::Health,
            description: "Community-focused yoga classes for all levels. First class is free!".into(),
            location: "Midtown".into(),
            author: Author::Named("Emma Davis".into()),
            author_avatar: None,
            rating: 4.7,
            image: "/woman-doing-yoga.png".into(),
            created_at: day(2025, 1, 13),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn service(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    address: &str,
    phone: Option<&str>,
    hours: Option<&str>,
    rating: f64,
    image: Option<&str>,
) -> Service {
    Service {
        id: id.into(),
        name: name.into(),
        category: category.into(),
        description: description.into(),
        address: address.into(),
        phone: phone.map(Into::into),
        hours: hours.map(Into::into),
        rating,
        image: image.map(Into::into),
    }
}

/// Local business listings for the discover view.
#[rustfmt::skip]
pub fn services() -> Vec<Service> {
    vec![
        service("1", "City Health Clinic", "health", "Walk-in clinic with experienced doctors. No appointment needed.", "123 Main St, Downtown", Some("(555) 123-4567"), Some("Mon-Fri: 8AM-8PM, Sat-Sun: 9AM-5PM"), 4.6, Some("/modern-clinic.jpg")),
        service("2", "Quick Fix Repairs", "services", "Same-day home repair services. Plumbing, electrical, and more.", "456 Oak Ave, Westside", Some("(555) 234-5678"), Some("24/7 Emergency Service"), 4.8, Some("/repair-service.jpg")),
        service("3", "Central Farmers Market", "shopping", "Fresh local produce and artisan goods every weekend.", "Central Plaza", None, Some("Sat-Sun: 7AM-2PM"), 4.9, Some("/bustling-farmers-market.png")),
        service("4", "Sunrise Yoga Studio", "fitness", "Peaceful yoga and meditation classes for all levels.", "12 Maple Blvd, Uptown", Some("(555) 345-6789"), Some("Mon-Sat: 6AM-8PM"), 4.7, Some("/yoga-studio.jpg")),
        service("5", "The Coffee Corner", "food", "Cozy café serving locally roasted coffee and homemade pastries.", "98 Elm St, Midtown", Some("(555) 456-7890"), Some("Mon-Sun: 7AM-7PM"), 4.5, Some("/coffee-shop.jpg")),
        service("6", "Bright Minds Tutoring", "education", "Personalized tutoring for K-12 and college students.", "245 Pine Ave, Eastside", Some("(555) 567-8901"), Some("Mon-Fri: 3PM-9PM, Sat: 10AM-4PM"), 4.9, Some("/tutoring-center.jpg")),
        service("7", "Downtown Gym & Fitness", "fitness", "Modern gym with top-tier equipment and personal trainers.", "77 Broadway, Downtown", Some("(555) 678-9012"), Some("Mon-Sun: 5AM-11PM"), 4.8, Some("/modern-gym.png")),
        service("8", "Happy Paws Pet Grooming", "services", "Professional pet grooming and care for cats and dogs.", "301 Birch Rd, Northside", Some("(555) 789-0123"), Some("Mon-Sat: 9AM-6PM"), 4.7, Some("/pet-grooming.jpg")),
        service("9", "CineStar Theaters", "entertainment", "Luxury movie theater with reclining seats and gourmet snacks.", "890 Movie Ln, Midtown", Some("(555) 890-1234"), Some("Mon-Sun: 10AM-12AM"), 4.6, Some("/movie-theater.jpg")),
        service("10", "Taste of Italy", "food", "Authentic Italian restaurant known for handmade pasta and pizza.", "222 Olive St, Downtown", Some("(555) 901-2345"), Some("Mon-Sun: 11AM-10PM"), 4.8, Some("/italian-restaurant.jpg")),
        service("11", "TechWise Electronics", "shopping", "Latest gadgets, phones, and accessories at unbeatable prices.", "555 Tech Park Dr, Eastside", Some("(555) 012-3456"), Some("Mon-Sat: 9AM-8PM, Sun: 10AM-6PM"), 4.5, Some("/electronics-store.jpg")),
        service("12", "GreenLeaf Spa", "health", "Relaxing massages, facials, and wellness treatments.", "400 Willow St, Lakeside", Some("(555) 678-4321"), Some("Mon-Sun: 9AM-9PM"), 4.9, Some("/spa-center.jpg")),
        service("13", "Urban Bike Rentals", "services", "Affordable daily and hourly bike rentals around the city.", "61 Riverwalk Blvd", Some("(555) 314-1592"), Some("Mon-Sun: 7AM-9PM"), 4.6, Some("/bike-rental.jpg")),
        service("14", "Bloom Boutique", "shopping", "Trendy fashion boutique featuring local and sustainable brands.", "37 Cherry Ln, Uptown", Some("(555) 926-8472"), Some("Mon-Sat: 10AM-7PM"), 4.7, Some("/shopping-boutique.jpg")),
        service("15", "City Library", "education", "Public library offering books, study spaces, and free Wi-Fi.", "10 Knowledge Dr, Downtown", Some("(555) 481-0923"), Some("Mon-Fri: 9AM-8PM, Sat: 10AM-6PM"), 4.8, Some("/city-library.jpg")),
    ]
}

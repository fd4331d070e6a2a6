//! The hardcoded seed catalog. This constructor is the seam where a future
//! data-fetching service would plug in.

use crate::models::Recipe;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "spicy-avocado-toast".into(),
            title: "Spicy Avocado Toast".into(),
            image: "https://images.unsplash.com/photo-1541519227354-08fa5d50c44d?w=800".into(),
            categories: strings(&["Breakfast", "Vegetarian"]),
            ingredients: strings(&[
                "2 slices sourdough bread",
                "1 ripe avocado",
                "1 tbsp lime juice",
                "1 tsp red pepper flakes",
                "Flaky sea salt",
            ]),
            steps: strings(&[
                "Toast the sourdough until golden and crisp.",
                "Mash the avocado with the lime juice and a pinch of salt.",
                "Spread over the toast and scatter the red pepper flakes on top.",
            ]),
            rating: 4.5,
            time_minutes: 10,
        },
        Recipe {
            id: "grilled-lemon-chicken".into(),
            title: "Grilled Lemon Chicken".into(),
            image: "https://images.unsplash.com/photo-1532550907401-a500c9a57435?w=800".into(),
            categories: strings(&["Dinner", "Grill"]),
            ingredients: strings(&[
                "2 chicken breasts",
                "1 lemon, juiced and zested",
                "2 tbsp olive oil",
                "2 cloves garlic, minced",
                "1 tsp cracked black pepper",
            ]),
            steps: strings(&[
                "Whisk the lemon juice, zest, oil, garlic and pepper into a marinade.",
                "Coat the chicken and rest it for 20 minutes.",
                "Grill over medium-high heat for 6-7 minutes per side.",
                "Rest for 5 minutes before slicing.",
            ]),
            rating: 4.2,
            time_minutes: 35,
        },
        Recipe {
            id: "creamy-mushroom-pasta".into(),
            title: "Creamy Mushroom Pasta".into(),
            image: "https://images.unsplash.com/photo-1473093295043-cdd812d0e601?w=800".into(),
            categories: strings(&["Dinner", "Vegetarian"]),
            ingredients: strings(&[
                "250 g tagliatelle",
                "300 g mixed mushrooms, sliced",
                "150 ml heavy cream",
                "1 shallot, finely chopped",
                "30 g grated parmesan",
            ]),
            steps: strings(&[
                "Cook the pasta in salted water until al dente.",
                "Brown the mushrooms and shallot in butter.",
                "Stir in the cream and parmesan, then toss with the pasta.",
            ]),
            rating: 4.7,
            time_minutes: 25,
        },
        Recipe {
            id: "berry-yogurt-parfait".into(),
            title: "Berry Yogurt Parfait".into(),
            image: "https://images.unsplash.com/photo-1488477181946-6428a0291777?w=800".into(),
            categories: strings(&["Breakfast", "Dessert"]),
            ingredients: strings(&[
                "200 g Greek yogurt",
                "1 cup mixed berries",
                "2 tbsp honey",
                "4 tbsp granola",
            ]),
            steps: strings(&[
                "Layer yogurt, berries and granola in a glass.",
                "Repeat the layers and drizzle the honey over the top.",
            ]),
            rating: 4.0,
            time_minutes: 5,
        },
        Recipe {
            id: "hearty-lentil-soup".into(),
            title: "Hearty Lentil Soup".into(),
            image: "https://images.unsplash.com/photo-1547592166-23ac45744acd?w=800".into(),
            categories: strings(&["Lunch", "Vegetarian"]),
            ingredients: strings(&[
                "1 cup green lentils",
                "1 onion, diced",
                "2 carrots, diced",
                "1 litre vegetable stock",
                "1 tsp ground cumin",
            ]),
            steps: strings(&[
                "Soften the onion and carrot in olive oil.",
                "Add the lentils, cumin and stock.",
                "Simmer for 30 minutes until the lentils are tender.",
                "Season and serve with crusty bread.",
            ]),
            rating: 4.3,
            time_minutes: 45,
        },
    ]
}

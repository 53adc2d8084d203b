diesel::table! {
    food_nutrition (id) {
        id -> Integer,
        name -> Nullable<Text>,
        category -> Nullable<Varchar>,
        image_url -> Nullable<Text>,
        calories -> Nullable<Text>,
        protein -> Nullable<Text>,
        total_fat -> Nullable<Text>,
        saturated_fat -> Nullable<Text>,
        monounsaturated_fat -> Nullable<Text>,
        polyunsaturated_fat -> Nullable<Text>,
        cholesterol -> Nullable<Text>,
        sodium -> Nullable<Text>,
        potassium -> Nullable<Text>,
        carbohydrates -> Nullable<Text>,
        dietary_fiber -> Nullable<Text>,
        sugars -> Nullable<Text>,
    }
}

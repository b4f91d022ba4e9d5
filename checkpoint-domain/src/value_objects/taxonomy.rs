// Categorical taxonomy value objects
// Closed sets describing an item; every rule component matches on them exhaustively.

categorical_tag! {
    /// Top-level classification of an item at intake.
    PrimaryCategory ("primary category") {
        SingleUsePlastic => "SINGLE_USE_PLASTIC",
        Weapon => "WEAPON",
        Alcohol => "ALCOHOL",
        Tobacco => "TOBACCO",
        ProhibitedSubstance => "PROHIBITED_SUBSTANCE",
        Allowed => "ALLOWED",
    }
}

categorical_tag! {
    SecondaryCategory ("secondary category") {
        FoodContainer => "FOOD_CONTAINER",
        BeverageContainer => "BEVERAGE_CONTAINER",
        Packaging => "PACKAGING",
        FoodAccessory => "FOOD_ACCESSORY",
        SmokingProduct => "SMOKING_PRODUCT",
        ElectronicSmoking => "ELECTRONIC_SMOKING",
        SharpObject => "SHARP_OBJECT",
        Firearm => "FIREARM",
        IllegalSubstance => "ILLEGAL_SUBSTANCE",
        ChemicalSubstance => "CHEMICAL_SUBSTANCE",
        AlcoholicBeverage => "ALCOHOLIC_BEVERAGE",
    }
}

categorical_tag! {
    ItemFunction ("item function") {
        Utensil => "UTENSIL",
        Container => "CONTAINER",
        Packaging => "PACKAGING",
        Tool => "TOOL",
        Consumable => "CONSUMABLE",
        Other => "OTHER",
    }
}

categorical_tag! {
    /// Where and how the item is expected to be consumed.
    ConsumptionContext ("consumption context") {
        Food => "FOOD",
        Beverage => "BEVERAGE",
        Takeout => "TAKEOUT",
        SchoolUse => "SCHOOL_USE",
        PersonalUse => "PERSONAL_USE",
        Unknown => "UNKNOWN",
    }
}

categorical_tag! {
    UsageType ("usage type") {
        SingleUse => "SINGLE_USE",
        Reusable => "REUSABLE",
        Other => "OTHER",
    }
}

categorical_tag! {
    /// How easily the item can be swapped for a compliant alternative.
    /// HIGH means alternatives are readily available.
    Replaceability ("replaceability") {
        High => "HIGH",
        Medium => "MEDIUM",
        Low => "LOW",
    }
}

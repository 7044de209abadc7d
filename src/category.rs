//! The fixed set of transaction categories known to the application.
//!
//! Category labels are stored as plain text on transactions, so the ledger
//! tolerates labels outside this set (they still count towards totals), but
//! only the categories listed here appear in analytics breakdowns and in the
//! new-transaction form.

use std::fmt::Display;

/// A known transaction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Raw materials bought for production.
    RawMaterial,
    /// Freight and transport costs.
    Transportation,
    /// Food and catering products.
    FoodProducts,
    /// Machinery and plant equipment.
    MachineEquipment,
    /// Servicing of company vehicles.
    VehicleService,
    /// Income that does not fit any other category.
    OtherIncome,
    /// Wages paid to employees.
    EmployeeSalary,
    /// One-off equipment purchases.
    EquipmentPurchase,
    /// Rent for the premises.
    BuildingRent,
    /// Sales revenue.
    Sells,
}

impl Category {
    /// All known categories in their display order.
    ///
    /// Breakdowns and form options iterate this array so that new categories
    /// only need to be added in one place.
    pub const ALL: [Category; 10] = [
        Category::RawMaterial,
        Category::Transportation,
        Category::FoodProducts,
        Category::MachineEquipment,
        Category::VehicleService,
        Category::OtherIncome,
        Category::EmployeeSalary,
        Category::EquipmentPurchase,
        Category::BuildingRent,
        Category::Sells,
    ];

    /// The category label as shown to users and stored on transactions.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::RawMaterial => "Raw Material",
            Category::Transportation => "Transportation",
            Category::FoodProducts => "Food Products",
            Category::MachineEquipment => "Machine Equipment",
            Category::VehicleService => "Vehicle Service",
            Category::OtherIncome => "Other Income",
            Category::EmployeeSalary => "Employee Salary",
            Category::EquipmentPurchase => "Equipment Purchase",
            Category::BuildingRent => "Building Rent",
            Category::Sells => "Sells",
        }
    }

    /// Look up a category by its label.
    ///
    /// Returns `None` for labels outside the known set.
    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == label)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

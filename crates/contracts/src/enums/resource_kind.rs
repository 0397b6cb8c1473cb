use serde::{Deserialize, Serialize};

/// Top-level areas of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Dashboard,
    Sales,
    Purchases,
    Inventory,
    Contacts,
    Reports,
}

impl Section {
    pub fn code(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Sales => "sales",
            Section::Purchases => "purchases",
            Section::Inventory => "inventory",
            Section::Contacts => "contacts",
            Section::Reports => "reports",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Sales => "Sales",
            Section::Purchases => "Purchases",
            Section::Inventory => "Inventory Management",
            Section::Contacts => "Contacts",
            Section::Reports => "Reports & Analytics",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Section::Dashboard => "Welcome back! Here's what's happening with your business.",
            Section::Sales => "Manage your sales quotes, orders, and invoices",
            Section::Purchases => "Manage purchase orders, invoices, and vendors",
            Section::Inventory => "Track and manage your inventory across warehouses and stores",
            Section::Contacts => "Manage your customers and suppliers",
            Section::Reports => "Generate comprehensive business reports and insights",
        }
    }

    /// Short name for navigation
    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Sales => "Sales",
            Section::Purchases => "Purchases",
            Section::Inventory => "Inventory",
            Section::Contacts => "Contacts",
            Section::Reports => "Reports",
        }
    }

    /// Icon name for navigation
    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "layout-dashboard",
            Section::Sales => "shopping-cart",
            Section::Purchases => "package",
            Section::Inventory => "warehouse",
            Section::Contacts => "users",
            Section::Reports => "bar-chart",
        }
    }

    pub fn all() -> Vec<Section> {
        vec![
            Section::Dashboard,
            Section::Sales,
            Section::Purchases,
            Section::Inventory,
            Section::Contacts,
            Section::Reports,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dashboard" => Some(Section::Dashboard),
            "sales" => Some(Section::Sales),
            "purchases" => Some(Section::Purchases),
            "inventory" => Some(Section::Inventory),
            "contacts" => Some(Section::Contacts),
            "reports" => Some(Section::Reports),
            _ => None,
        }
    }

    /// Tabs of the section, in display order. The first one is the default.
    /// Reports has no record list.
    pub fn tabs(&self) -> Vec<ResourceKind> {
        match self {
            Section::Dashboard => vec![ResourceKind::RecentTransactions],
            Section::Sales => vec![
                ResourceKind::SalesInvoices,
                ResourceKind::SalesOrders,
                ResourceKind::SalesQuotes,
            ],
            Section::Purchases => vec![
                ResourceKind::PurchaseOrders,
                ResourceKind::PurchaseInvoices,
                ResourceKind::Vendors,
            ],
            Section::Inventory => vec![
                ResourceKind::InventoryItems,
                ResourceKind::Warehouses,
                ResourceKind::Stores,
            ],
            Section::Contacts => vec![
                ResourceKind::Contacts(ContactScope::All),
                ResourceKind::Contacts(ContactScope::Customers),
                ResourceKind::Contacts(ContactScope::Suppliers),
            ],
            Section::Reports => Vec::new(),
        }
    }

    pub fn default_tab(&self) -> Option<ResourceKind> {
        self.tabs().first().copied()
    }
}

/// Which contacts a contacts tab shows. The tab id is passed through to the
/// record source as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactScope {
    All,
    Customers,
    Suppliers,
}

impl ContactScope {
    pub fn tab_id(&self) -> &'static str {
        match self {
            ContactScope::All => "all",
            ContactScope::Customers => "customers",
            ContactScope::Suppliers => "suppliers",
        }
    }

    /// Value of the contact `type` field this scope keeps, `None` for all.
    pub fn contact_type(&self) -> Option<&'static str> {
        match self {
            ContactScope::All => None,
            ContactScope::Customers => Some("customer"),
            ContactScope::Suppliers => Some("supplier"),
        }
    }
}

/// Every tab of every section. Each variant selects its own column
/// specification, searchable fields and backing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    RecentTransactions,
    SalesInvoices,
    SalesOrders,
    SalesQuotes,
    PurchaseOrders,
    PurchaseInvoices,
    Vendors,
    InventoryItems,
    Warehouses,
    Stores,
    Contacts(ContactScope),
}

impl ResourceKind {
    pub fn section(&self) -> Section {
        match self {
            ResourceKind::RecentTransactions => Section::Dashboard,
            ResourceKind::SalesInvoices | ResourceKind::SalesOrders | ResourceKind::SalesQuotes => {
                Section::Sales
            }
            ResourceKind::PurchaseOrders
            | ResourceKind::PurchaseInvoices
            | ResourceKind::Vendors => Section::Purchases,
            ResourceKind::InventoryItems | ResourceKind::Warehouses | ResourceKind::Stores => {
                Section::Inventory
            }
            ResourceKind::Contacts(_) => Section::Contacts,
        }
    }

    /// Tab identifier within the section
    pub fn tab_id(&self) -> &'static str {
        match self {
            ResourceKind::RecentTransactions => "recent",
            ResourceKind::SalesInvoices => "invoices",
            ResourceKind::SalesOrders => "orders",
            ResourceKind::SalesQuotes => "quotes",
            ResourceKind::PurchaseOrders => "orders",
            ResourceKind::PurchaseInvoices => "invoices",
            ResourceKind::Vendors => "vendors",
            ResourceKind::InventoryItems => "items",
            ResourceKind::Warehouses => "warehouses",
            ResourceKind::Stores => "stores",
            ResourceKind::Contacts(scope) => scope.tab_id(),
        }
    }

    /// Globally unique key, e.g. `sales.invoices` or `contacts.customers`.
    pub fn key(&self) -> String {
        format!("{}.{}", self.section().code(), self.tab_id())
    }

    /// Key of the backing table. All contact scopes share one table.
    pub fn table_key(&self) -> String {
        match self {
            ResourceKind::Contacts(_) => "contacts.contacts".to_string(),
            other => other.key(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::RecentTransactions => "Recent Transactions",
            ResourceKind::SalesInvoices => "Invoices",
            ResourceKind::SalesOrders => "Sales Orders",
            ResourceKind::SalesQuotes => "Quotes",
            ResourceKind::PurchaseOrders => "Purchase Orders",
            ResourceKind::PurchaseInvoices => "Purchase Invoices",
            ResourceKind::Vendors => "Vendors",
            ResourceKind::InventoryItems => "Items",
            ResourceKind::Warehouses => "Warehouses",
            ResourceKind::Stores => "Stores",
            ResourceKind::Contacts(ContactScope::All) => "All Contacts",
            ResourceKind::Contacts(ContactScope::Customers) => "Customers",
            ResourceKind::Contacts(ContactScope::Suppliers) => "Suppliers",
        }
    }

    /// Singular noun used in messages ("No invoices found", "Viewing invoice ...").
    pub fn noun(&self) -> &'static str {
        match self {
            ResourceKind::RecentTransactions => "transaction",
            ResourceKind::SalesInvoices | ResourceKind::PurchaseInvoices => "invoice",
            ResourceKind::SalesOrders => "order",
            ResourceKind::SalesQuotes => "quote",
            ResourceKind::PurchaseOrders => "purchase order",
            ResourceKind::Vendors => "vendor",
            ResourceKind::InventoryItems => "item",
            ResourceKind::Warehouses => "warehouse",
            ResourceKind::Stores => "store",
            ResourceKind::Contacts(_) => "contact",
        }
    }

    pub fn create_label(&self) -> &'static str {
        match self {
            ResourceKind::RecentTransactions => "Create Invoice",
            ResourceKind::SalesInvoices => "New Invoice",
            ResourceKind::SalesOrders => "New Order",
            ResourceKind::SalesQuotes => "New Quote",
            ResourceKind::PurchaseOrders => "New Purchase Order",
            ResourceKind::PurchaseInvoices => "New Invoice",
            ResourceKind::Vendors => "Add Vendor",
            ResourceKind::InventoryItems => "Add Item",
            ResourceKind::Warehouses => "Add Warehouse",
            ResourceKind::Stores => "Add Store",
            ResourceKind::Contacts(_) => "Add Contact",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ResourceKind::RecentTransactions => "receipt",
            ResourceKind::SalesInvoices | ResourceKind::PurchaseInvoices => "file-text",
            ResourceKind::SalesOrders | ResourceKind::PurchaseOrders => "shopping-cart",
            ResourceKind::SalesQuotes => "calculator",
            ResourceKind::Vendors | ResourceKind::Contacts(ContactScope::All) => "users",
            ResourceKind::InventoryItems => "package",
            ResourceKind::Warehouses => "warehouse",
            ResourceKind::Stores => "store",
            ResourceKind::Contacts(ContactScope::Customers) => "user",
            ResourceKind::Contacts(ContactScope::Suppliers) => "truck",
        }
    }

    pub fn all() -> Vec<ResourceKind> {
        Section::all().iter().flat_map(Section::tabs).collect()
    }

    /// Parse a tab id within a section
    pub fn from_tab(section: Section, tab_id: &str) -> Option<Self> {
        section.tabs().into_iter().find(|kind| kind.tab_id() == tab_id)
    }

    /// Parse a global key produced by [`ResourceKind::key`]
    pub fn from_key(key: &str) -> Option<Self> {
        let (section, tab) = key.split_once('.')?;
        Self::from_tab(Section::from_code(section)?, tab)
    }
}

use rust_decimal_macros::dec;

use super::ymd;
use crate::models::{
    invoice::{
        ClientType, Invoice, InvoiceStatus, InvoiceTotals, PaymentMethod, ProductLine, ServiceLine,
    },
    marketplace::Product,
};

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Royal Canin Veterinary Diet".into(),
            description: "Alimento terapéutico para perros con problemas digestivos".into(),
            price: dec!(89.99),
            category: "Alimentos".into(),
            supplier: "PetNutrition Pro".into(),
            rating: 4.8,
            stock: 25,
            image: "/placeholder.svg".into(),
            free_shipping: true,
            promotion: Some("20% OFF".into()),
        },
        Product {
            id: 2,
            name: "Collar GPS PetTracker Pro".into(),
            description: "Collar inteligente con GPS y monitoreo de salud".into(),
            price: dec!(149.99),
            category: "Tecnología".into(),
            supplier: "TechPet Solutions".into(),
            rating: 4.6,
            stock: 12,
            image: "/placeholder.svg".into(),
            free_shipping: true,
            promotion: None,
        },
        Product {
            id: 3,
            name: "Kit Quirúrgico Profesional".into(),
            description: "Set completo de instrumentos quirúrgicos veterinarios".into(),
            price: dec!(299.99),
            category: "Instrumental".into(),
            supplier: "MedVet Supplies".into(),
            rating: 4.9,
            stock: 8,
            image: "/placeholder.svg".into(),
            free_shipping: false,
            promotion: None,
        },
        Product {
            id: 4,
            name: "Vacuna Antirrábica Nobivac".into(),
            description: "Vacuna antirrábica de alta calidad para perros y gatos".into(),
            price: dec!(35.50),
            category: "Vacunas".into(),
            supplier: "VetPharma Direct".into(),
            rating: 4.7,
            stock: 50,
            image: "/placeholder.svg".into(),
            free_shipping: false,
            promotion: Some("Nuevo".into()),
        },
    ]
}

fn service_line(name: &str, price: rust_decimal::Decimal) -> ServiceLine {
    ServiceLine {
        name: name.into(),
        price,
    }
}

fn product_line(name: &str, price: rust_decimal::Decimal, quantity: u32) -> ProductLine {
    ProductLine {
        name: name.into(),
        price,
        quantity,
    }
}

/// Totals were computed with the unconditional 12% rule
pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            number: "F-001-2024".into(),
            owner_id: 1,
            client: "María García Rodríguez".into(),
            pet_name: "Max".into(),
            veterinarian: "Dr. Rodríguez".into(),
            client_type: ClientType::ConDatos,
            services: vec![
                service_line("Consulta General", dec!(25.00)),
                service_line("Vacuna Antirrábica", dec!(35.00)),
            ],
            products: vec![product_line("Bravecto Antipulgas", dec!(45.00), 1)],
            totals: InvoiceTotals {
                subtotal: dec!(105.00),
                tax: dec!(12.60),
                total: dec!(117.60),
            },
            payment_method: PaymentMethod::Tarjeta,
            status: InvoiceStatus::Pagada,
            date: ymd(2024, 6, 28),
        },
        Invoice {
            number: "F-002-2024".into(),
            owner_id: 2,
            client: "Carlos López Mendoza".into(),
            pet_name: "Luna".into(),
            veterinarian: "Dra. Martínez".into(),
            client_type: ClientType::ConsumidorFinal,
            services: vec![service_line("Análisis Hemograma", dec!(35.00))],
            products: vec![product_line("Antibiótico", dec!(12.50), 2)],
            totals: InvoiceTotals {
                subtotal: dec!(60.00),
                tax: dec!(7.20),
                total: dec!(67.20),
            },
            payment_method: PaymentMethod::Efectivo,
            status: InvoiceStatus::Pendiente,
            date: ymd(2024, 6, 25),
        },
        Invoice {
            number: "F-003-2024".into(),
            owner_id: 3,
            client: "Ana Martínez Silva".into(),
            pet_name: "Buddy".into(),
            veterinarian: "Dr. García".into(),
            client_type: ClientType::ConDatos,
            services: vec![service_line("Desparasitación", dec!(20.00))],
            products: vec![product_line("Royal Canin Digestive", dec!(32.50), 2)],
            totals: InvoiceTotals {
                subtotal: dec!(85.00),
                tax: dec!(10.20),
                total: dec!(95.20),
            },
            payment_method: PaymentMethod::Transferencia,
            status: InvoiceStatus::Vencida,
            date: ymd(2024, 6, 12),
        },
        Invoice {
            number: "F-004-2024".into(),
            owner_id: 1,
            client: "María García Rodríguez".into(),
            pet_name: "Coco".into(),
            veterinarian: "Dra. López".into(),
            client_type: ClientType::ConDatos,
            services: vec![service_line("Consulta General", dec!(25.00))],
            products: vec![],
            totals: InvoiceTotals {
                subtotal: dec!(25.00),
                tax: dec!(3.00),
                total: dec!(28.00),
            },
            payment_method: PaymentMethod::Efectivo,
            status: InvoiceStatus::Pagada,
            date: ymd(2024, 6, 15),
        },
    ]
}

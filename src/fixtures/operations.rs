use rust_decimal_macros::dec;

use super::{hm, ymd};
use crate::models::{
    calendar::{AlertEvent, EventStatus, EventType},
    iot::{DeviceStatus, GpsLocation, IotDevice},
    laboratory::{Analysis, AnalysisPriority, AnalysisStatus},
    pet::Species,
    pharmacy::Medicine,
    police::{Seizure, SpeciesAlert, Urgency},
    service::{Appointment, AppointmentStatus, Service, ServiceAvailability, ServiceSpecies},
};

pub fn medicines() -> Vec<Medicine> {
    vec![
        Medicine {
            id: 1,
            name: "Amoxicilina 500mg".into(),
            active_ingredient: "Amoxicilina".into(),
            stock: 45,
            min_stock: 10,
            price: dec!(25.50),
            lot: "AMX-2024-001".into(),
            expiry_date: ymd(2025, 8, 15),
            supplier: "FarmaVet S.A.".into(),
            category: "Antibióticos".into(),
            species: vec![Species::Perro, Species::Gato],
        },
        Medicine {
            id: 2,
            name: "Metacam 5mg/ml".into(),
            active_ingredient: "Meloxicam".into(),
            stock: 8,
            min_stock: 15,
            price: dec!(45.00),
            lot: "MTC-2024-005".into(),
            expiry_date: ymd(2025, 12, 20),
            supplier: "VetPharma Ltd.".into(),
            category: "Antiinflamatorios".into(),
            species: vec![Species::Perro, Species::Gato],
        },
        Medicine {
            id: 3,
            name: "Frontline Plus".into(),
            active_ingredient: "Fipronil + Metopreno".into(),
            stock: 25,
            min_stock: 20,
            price: dec!(35.75),
            lot: "FTL-2024-012".into(),
            expiry_date: ymd(2026, 3, 10),
            supplier: "Boehringer Ingelheim".into(),
            category: "Antiparasitarios".into(),
            species: vec![Species::Perro],
        },
    ]
}

pub fn analyses() -> Vec<Analysis> {
    vec![
        Analysis {
            id: 1,
            pet_name: "Max".into(),
            owner_name: "María García".into(),
            test_type: "Hemograma Completo".into(),
            requested_at: ymd(2024, 7, 1),
            result_at: Some(ymd(2024, 7, 2)),
            status: AnalysisStatus::Completado,
            veterinarian: "Dr. Rodríguez".into(),
            laboratory: "LabVet Central".into(),
            priority: AnalysisPriority::Normal,
            cost: dec!(45.00),
        },
        Analysis {
            id: 2,
            pet_name: "Luna".into(),
            owner_name: "Carlos López".into(),
            test_type: "Perfil Hepático".into(),
            requested_at: ymd(2024, 7, 2),
            result_at: None,
            status: AnalysisStatus::Procesando,
            veterinarian: "Dra. Martínez".into(),
            laboratory: "DiagnostiVet".into(),
            priority: AnalysisPriority::Alta,
            cost: dec!(65.00),
        },
        Analysis {
            id: 3,
            pet_name: "Buddy".into(),
            owner_name: "Ana Martínez".into(),
            test_type: "Análisis de Orina".into(),
            requested_at: ymd(2024, 7, 3),
            result_at: None,
            status: AnalysisStatus::Pendiente,
            veterinarian: "Dr. Rodríguez".into(),
            laboratory: "LabVet Central".into(),
            priority: AnalysisPriority::Normal,
            cost: dec!(25.00),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn service(
    id: i64,
    name: &str,
    category: &str,
    description: &str,
    price: rust_decimal::Decimal,
    duration_minutes: u32,
    veterinarian: &str,
    species: ServiceSpecies,
    requires_anesthesia: bool,
) -> Service {
    Service {
        id,
        name: name.into(),
        category: category.into(),
        description: description.into(),
        price,
        duration_minutes,
        veterinarian: veterinarian.into(),
        species,
        requires_anesthesia,
        availability: ServiceAvailability::Disponible,
        next_availability: None,
    }
}

pub fn services() -> Vec<Service> {
    vec![
        service(
            1,
            "Castración Canina",
            "Cirugías",
            "Esterilización quirúrgica para perros machos",
            dec!(120.00),
            60,
            "Dr. Martínez",
            ServiceSpecies::Perros,
            true,
        ),
        service(
            2,
            "Ovariohisterectomía Felina",
            "Cirugías",
            "Esterilización quirúrgica para gatas",
            dec!(95.00),
            45,
            "Dra. García",
            ServiceSpecies::Gatos,
            true,
        ),
        service(
            3,
            "Extracción Dental",
            "Cirugías",
            "Extracción de piezas dentales dañadas",
            dec!(80.00),
            30,
            "Dr. López",
            ServiceSpecies::Ambos,
            true,
        ),
        service(
            4,
            "Control Prenatal",
            "Reproductivo",
            "Seguimiento del embarazo con ecografía",
            dec!(45.00),
            30,
            "Dra. Morales",
            ServiceSpecies::Ambos,
            false,
        ),
        Service {
            availability: ServiceAvailability::NoDisponible,
            next_availability: Some(ymd(2024, 7, 20)),
            ..service(
                5,
                "Asistencia al Parto",
                "Reproductivo",
                "Atención veterinaria durante el parto",
                dec!(150.00),
                180,
                "Dr. Fernández",
                ServiceSpecies::Ambos,
                false,
            )
        },
        service(
            6,
            "Control Postnatal",
            "Reproductivo",
            "Revisión de madre y crías post-parto",
            dec!(35.00),
            25,
            "Dra. Herrera",
            ServiceSpecies::Ambos,
            false,
        ),
        service(
            7,
            "Consulta General",
            "Consultas",
            "Examen clínico general y diagnóstico",
            dec!(25.00),
            20,
            "Dr. Castillo",
            ServiceSpecies::Ambos,
            false,
        ),
        service(
            8,
            "Consulta Especializada",
            "Consultas",
            "Consulta con especialista en dermatología",
            dec!(55.00),
            40,
            "Dra. Jiménez",
            ServiceSpecies::Ambos,
            false,
        ),
        service(
            9,
            "Revisión Geriátrica",
            "Consultas",
            "Chequeo completo para mascotas mayores",
            dec!(40.00),
            35,
            "Dr. Vega",
            ServiceSpecies::Ambos,
            false,
        ),
        service(
            10,
            "Hemograma Completo",
            "Laboratorio",
            "Análisis sanguíneo completo",
            dec!(35.00),
            15,
            "Lab. Externo",
            ServiceSpecies::Ambos,
            false,
        ),
        service(
            11,
            "Perfil Hepático",
            "Laboratorio",
            "Análisis de función hepática",
            dec!(45.00),
            15,
            "Lab. Externo",
            ServiceSpecies::Ambos,
            false,
        ),
    ]
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: 1,
            service_id: 1,
            service_name: "Castración Canina".into(),
            pet_name: "Max".into(),
            owner_name: "María García".into(),
            date: ymd(2024, 7, 15),
            time: hm(9, 0),
            veterinarian: "Dr. Martínez".into(),
            status: AppointmentStatus::Programada,
            notes: None,
            price: dec!(120.00),
        },
        Appointment {
            id: 2,
            service_id: 7,
            service_name: "Consulta General".into(),
            pet_name: "Luna".into(),
            owner_name: "Carlos López".into(),
            date: ymd(2024, 7, 12),
            time: hm(10, 30),
            veterinarian: "Dr. Castillo".into(),
            status: AppointmentStatus::Completada,
            notes: Some("Vacunación al día, peso normal".into()),
            price: dec!(25.00),
        },
    ]
}

pub fn devices() -> Vec<IotDevice> {
    vec![
        IotDevice {
            id: 1,
            pet_name: "Max".into(),
            device_id: "GPS-001".into(),
            status: DeviceStatus::Online,
            battery: 85.0,
            temperature: 38.2,
            heart_rate: 75,
            activity: "walking".into(),
            location: GpsLocation {
                lat: 19.4326,
                lng: -99.1332,
                address: "Parque México, Roma Norte".into(),
            },
            last_update: "Hace 2 min".into(),
        },
        IotDevice {
            id: 2,
            pet_name: "Luna".into(),
            device_id: "GPS-002".into(),
            status: DeviceStatus::Online,
            battery: 42.0,
            temperature: 37.8,
            heart_rate: 82,
            activity: "resting".into(),
            location: GpsLocation {
                lat: 19.4284,
                lng: -99.1276,
                address: "Parque España, Condesa".into(),
            },
            last_update: "Hace 5 min".into(),
        },
        IotDevice {
            id: 3,
            pet_name: "Buddy".into(),
            device_id: "GPS-003".into(),
            status: DeviceStatus::Offline,
            battery: 12.0,
            temperature: 0.0,
            heart_rate: 0,
            activity: "unknown".into(),
            location: GpsLocation {
                lat: 19.4205,
                lng: -99.1374,
                address: "Última ubicación conocida".into(),
            },
            last_update: "Hace 2 horas".into(),
        },
    ]
}

pub fn species_alerts() -> Vec<SpeciesAlert> {
    vec![
        SpeciesAlert {
            id: 1,
            scientific_name: "Panthera onca".into(),
            common_name: "Jaguar".into(),
            conservation_state: "En Peligro Crítico".into(),
            location: "Amazonía Ecuatoriana".into(),
            reported_at: ymd(2024, 7, 1),
            reported_by: "Unidad Ambiental Pastaza".into(),
            description: "Avistamiento de jaguar herido cerca del río Puyo".into(),
            urgency: Urgency::Alta,
        },
        SpeciesAlert {
            id: 2,
            scientific_name: "Ateles fusciceps".into(),
            common_name: "Mono Araña de Cabeza Marrón".into(),
            conservation_state: "En Peligro Crítico".into(),
            location: "Bosque Protector Chongón-Colonche".into(),
            reported_at: ymd(2024, 6, 28),
            reported_by: "Policía Ambiental Guayas".into(),
            description: "Grupo de monos desplazados por deforestación".into(),
            urgency: Urgency::Media,
        },
        SpeciesAlert {
            id: 3,
            scientific_name: "Chelonia mydas".into(),
            common_name: "Tortuga Verde".into(),
            conservation_state: "Vulnerable".into(),
            location: "Playa de Machalilla".into(),
            reported_at: ymd(2024, 7, 2),
            reported_by: "Guardaparques SNAP".into(),
            description: "Tortuga con lesiones por redes de pesca".into(),
            urgency: Urgency::Alta,
        },
    ]
}

pub fn seizures() -> Vec<Seizure> {
    vec![
        Seizure {
            id: 1,
            date: ymd(2024, 7, 3),
            location: "Terminal Terrestre Quitumbe".into(),
            seized_species: "Loros, Tucanes (15 aves)".into(),
            responsible: "Sgto. María Rodríguez".into(),
            status: "En Proceso".into(),
            animal_destination: "Centro de Rescate Aves Exóticas".into(),
            legal_document: "ACTA-AMB-2024-158".into(),
            suspect: "Juan Carlos M. (CI: 170123456-7)".into(),
        },
        Seizure {
            id: 2,
            date: ymd(2024, 7, 1),
            location: "Aeropuerto José Joaquín de Olmedo".into(),
            seized_species: "Iguanas Marinas (3 ejemplares)".into(),
            responsible: "Tte. Carlos Vásquez".into(),
            status: "Completado".into(),
            animal_destination: "Estación Científica Charles Darwin".into(),
            legal_document: "ACTA-AMB-2024-156".into(),
            suspect: "Turista extranjero".into(),
        },
    ]
}

pub fn alert_events() -> Vec<AlertEvent> {
    vec![
        AlertEvent {
            id: 1,
            event_type: EventType::Vacuna,
            title: "Vacuna Antirrábica - Max".into(),
            pet_name: Some("Max".into()),
            owner_name: "María García".into(),
            date: ymd(2024, 7, 10),
            priority: Urgency::Alta,
            status: EventStatus::Pendiente,
            description: "Refuerzo anual de vacuna antirrábica".into(),
        },
        AlertEvent {
            id: 2,
            event_type: EventType::Cita,
            title: "Control Post-Quirúrgico - Luna".into(),
            pet_name: Some("Luna".into()),
            owner_name: "Carlos López".into(),
            date: ymd(2024, 7, 8),
            priority: Urgency::Alta,
            status: EventStatus::Pendiente,
            description: "Revisión de herida quirúrgica".into(),
        },
        AlertEvent {
            id: 3,
            event_type: EventType::Corte,
            title: "Fecha límite pago - Ana Martínez".into(),
            pet_name: None,
            owner_name: "Ana Martínez".into(),
            date: ymd(2024, 7, 12),
            priority: Urgency::Media,
            status: EventStatus::Pendiente,
            description: "Vencimiento factura F-003-2024 por $95.20".into(),
        },
        AlertEvent {
            id: 4,
            event_type: EventType::Seguimiento,
            title: "Seguimiento Tratamiento - Buddy".into(),
            pet_name: Some("Buddy".into()),
            owner_name: "Ana Martínez".into(),
            date: ymd(2024, 7, 15),
            priority: Urgency::Media,
            status: EventStatus::Pendiente,
            description: "Evaluación de progreso del tratamiento".into(),
        },
        AlertEvent {
            id: 5,
            event_type: EventType::Vacuna,
            title: "Triple Felina - Mimi".into(),
            pet_name: Some("Mimi".into()),
            owner_name: "Pedro Ruiz".into(),
            date: ymd(2024, 7, 5),
            priority: Urgency::Alta,
            status: EventStatus::Vencido,
            description: "Vacuna vencida desde hace 2 días".into(),
        },
    ]
}

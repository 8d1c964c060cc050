use app::dashboards;
use app::domain::a001_client::page::ClientsPage;
use app::domain::a002_supplier::page::SuppliersPage;
use app::domain::a003_financial_entry::page::FinancialPage;
use app::domain::a004_production_order::page::ProductionPage;
use app::domain::a005_mix_formula::page::FormulasPage;
use app::domain::a005_mix_formula::service as formula_service;
use app::domain::a007_report::page::ReportsPage;
use app::fixtures;
use app::system;
use app::system::store::NullStore;
use contracts::domain::a005_mix_formula::aggregate::MixFormulaDto;
use serde_json::json;

/// Renders every page view model from the fixture data and prints the
/// result as JSON, exercising the full render contract end to end.
fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("building page view models from fixture data");

    let overview = dashboards::d100_overview::service::build(
        &fixtures::clients::CLIENTS,
        &fixtures::production_orders::PRODUCTION_ORDERS,
    );
    let clientes = ClientsPage::default().build(&fixtures::clients::CLIENTS);
    let fornecedores = SuppliersPage::default().build(&fixtures::suppliers::SUPPLIERS);
    let financeiro =
        FinancialPage::default().build(&fixtures::financial_entries::FINANCIAL_ENTRIES);
    let producao = ProductionPage::default().build(&fixtures::production_orders::PRODUCTION_ORDERS);
    let tracos = FormulasPage::default().build(
        &fixtures::mix_formulas::MIX_FORMULAS,
        &fixtures::quality_tests::QUALITY_TESTS,
    );
    let relatorios =
        ReportsPage::default().build(&fixtures::reports::REPORTS, fixtures::reports::REPORT_KINDS);
    let configuracoes = system::settings::build(&fixtures::users::USERS);

    let output = json!({
        "overview": overview,
        "clientes": clientes,
        "fornecedores": fornecedores,
        "financeiro": financeiro,
        "producao": producao,
        "tracos": tracos,
        "relatorios": relatorios,
        "configuracoes": configuracoes,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    // Form submissions only validate and log; the fixture never changes.
    let demo_form = MixFormulaDto {
        nome: "Traço Demo 18MPa".to_string(),
        tipo: "Bloco Estrutural".to_string(),
        cimento: "380kg".to_string(),
        areia: "620kg".to_string(),
        brita: "1150kg".to_string(),
        agua: "170L".to_string(),
        ..Default::default()
    };
    formula_service::submit(&demo_form, &NullStore)?;

    Ok(())
}

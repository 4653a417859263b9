//! The three branded PDF documents: a cover page followed by flowed content.

use crate::foundation::error::BrandpressResult;
use crate::layout::blocks::{Block, DocumentStyle};
use crate::layout::flow::{Document, PageFlow, PageGeometry};
use crate::text::engine::TextEngine;

pub const COVER_DATE: &str = "February 2026";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    PlatformOverview,
    ArchitectureGuide,
    ProtocolWhitepaper,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::PlatformOverview,
        DocumentKind::ArchitectureGuide,
        DocumentKind::ProtocolWhitepaper,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::PlatformOverview => "AgentRails-Platform-Overview.pdf",
            Self::ArchitectureGuide => "AgentRails-Enterprise-Architecture-Guide.pdf",
            Self::ProtocolWhitepaper => "AgentRails-x402-Protocol-Whitepaper.pdf",
        }
    }

    /// Cover title, also shown in the running header.
    pub fn title(self) -> &'static str {
        match self {
            Self::PlatformOverview => "Platform Overview",
            Self::ArchitectureGuide => "Enterprise Architecture Guide",
            Self::ProtocolWhitepaper => "x402 Protocol Whitepaper",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::PlatformOverview => "AI Agent Payment Infrastructure for the Enterprise",
            Self::ArchitectureGuide => {
                "Copilot Studio, MCP Servers, Power Platform, and x402 Payments"
            }
            Self::ProtocolWhitepaper => "HTTP-Native Payments for the Agent Economy",
        }
    }

    /// Content blocks in reading order.
    pub fn blocks(self) -> Vec<Block> {
        match self {
            Self::PlatformOverview => platform_overview(),
            Self::ArchitectureGuide => architecture_guide(),
            Self::ProtocolWhitepaper => protocol_whitepaper(),
        }
    }

    #[tracing::instrument(level = "debug", skip(engine, geometry))]
    pub fn render(
        self,
        engine: &mut TextEngine,
        geometry: &PageGeometry,
    ) -> BrandpressResult<Document> {
        let mut flow = PageFlow::new(engine, self.title(), DocumentStyle::default(), *geometry);
        flow.cover(self.title(), self.subtitle(), COVER_DATE)?;
        for block in self.blocks() {
            flow.emit(&block)?;
        }
        let doc = flow.finish()?;
        tracing::debug!(
            pages = doc.page_count(),
            breaks = doc.stats.page_breaks,
            "document laid out"
        );
        Ok(doc)
    }
}

fn h(text: &str) -> Block {
    Block::heading(text)
}

fn sub(text: &str) -> Block {
    Block::sub_heading(text)
}

fn p(text: &str) -> Block {
    Block::paragraph(text)
}

fn b(text: &str) -> Block {
    Block::bullet(text)
}

/// Bullet whose label is everything before the ` -- ` separator.
fn lb(text: &str) -> Block {
    match text.split_once(" -- ") {
        Some((label, _)) => Block::labeled_bullet(text, label),
        None => Block::bullet(text),
    }
}

fn platform_overview() -> Vec<Block> {
    vec![
        h("What is AgentRails?"),
        p("AgentRails is enterprise AI agent infrastructure that gives your agents autonomous \
           payment capabilities via the x402 protocol. Build with Microsoft Copilot Studio, \
           govern with policies and audit trails, pay with USDC stablecoin -- from development \
           to production, guardrails included."),
        p("The x402 protocol replaces API keys with HTTP-native payments. When an agent calls a \
           protected API, the server returns 402 Payment Required with the price. The agent pays \
           instantly in USDC and gets access -- no signup, no credentials, no subscription tiers."),
        h("Key Capabilities"),
        lb("5 SDK integrations -- LangChain, CrewAI, Semantic Kernel, Microsoft Agent Framework, \
            and Copilot Studio"),
        lb("Enterprise governance -- Per-agent spending limits, approval workflows, kill \
            switches, and full audit trails"),
        lb("Microsoft 365 native -- Copilot Studio plugins let finance teams query x402 revenue \
            in Teams"),
        lb("Instant USDC settlement -- Payments settle in milliseconds on-chain with \
            cryptographic proof"),
        lb("Zero credential management -- No API keys to provision, rotate, or leak"),
        lb("Open source foundation -- Core protocol on GitHub, enterprise features layered on top"),
        h("How It Works"),
        sub("1. Agent Calls Any API"),
        p("No signup required. Standard HTTP request. The server returns 402 Payment Required \
           with the price in USDC."),
        sub("2. Agent Pays Instantly"),
        p("The SDK checks budget limits, signs a USDC payment authorization (EIP-3009), and \
           retries the request -- all in one round trip. No human approval needed."),
        sub("3. Data Returned, Settled On-Chain"),
        p("The API delivers the response. Payment settles in milliseconds with cryptographic \
           proof on Base, Ethereum, or Arc. The agent moves to the next task."),
        h("Pricing"),
        lb("Sandbox -- Free. Full API access on testnet with test USDC."),
        lb("Pay-as-you-go -- 0.5% per transaction on mainnet. No monthly minimum."),
        lb("Pro -- $49/month. Unlimited transactions, 0% fees, priority support."),
        lb("Enterprise -- $2,500 one-time. Full source code, policy engine, admin dashboard, \
            Copilot Studio plugins."),
        h("Technology Stack"),
        p("Backend: ASP.NET Core 8.0 on Azure/Render. Database: PostgreSQL. Blockchain: Circle \
           Developer Controlled Wallets + USDC on Base, Ethereum, and Arc networks. AI: Microsoft \
           Copilot Studio, Semantic Kernel, Agent Framework. Protocol: x402 V2 (EIP-3009 \
           transferWithAuthorization)."),
        Block::info_box(
            "Get Started",
            "Sandbox: sandbox.agentrails.io/swagger  |  Docs: www.agentrails.io/docs  |  \
             Enterprise: sales@agentrails.io  |  GitHub: github.com/kmatthewsio/AgenticCommerce",
        ),
    ]
}

fn architecture_guide() -> Vec<Block> {
    vec![
        h("Architecture Overview"),
        p("AgentRails enterprise deployments integrate across the full Microsoft 365 stack. The \
           architecture connects Copilot Studio agents to internal systems via MCP (Model Context \
           Protocol) servers, orchestrates workflows through Power Automate, stores governance \
           data in Dataverse, and enables autonomous payments via the x402 protocol."),
        sub("Core Components"),
        lb("Copilot Studio -- Build and deploy custom AI agents with governed capabilities in \
            Microsoft Teams"),
        lb("MCP Servers -- Model Context Protocol servers provide scoped, secure access to \
            internal data and APIs"),
        lb("Power Automate -- Orchestrate approval workflows, escalation paths, and compliance \
            reporting"),
        lb("Dataverse -- Central store for agent state, policies, audit logs, and security roles"),
        lb("x402 Payment Layer -- Autonomous USDC payments with enterprise spending controls"),
        lb("Admin Dashboard -- Next.js management console for agents, transactions, policies, and \
            audit logs"),
        h("Copilot Studio Integration"),
        p("AgentRails provides two pre-built Copilot Studio action sets that can be imported \
           directly:"),
        sub("FinanceOps Actions"),
        p("Revenue queries, transaction search, payment analytics, and spending reports. Finance \
           teams ask natural-language questions in Teams: \"What's our x402 revenue this month?\" \
           The copilot calls the AgentRails API and returns formatted results with charts."),
        sub("Agent Executor Actions"),
        p("Agent management, policy enforcement, kill switches, and status monitoring. Operators \
           manage agents conversationally: \"Pause research-agent-01\" or \"Show agents over \
           their spending limit.\""),
        h("MCP Server Architecture"),
        p("Model Context Protocol servers act as secure bridges between Copilot Studio agents and \
           your internal systems. Each MCP server exposes a scoped set of tools that agents can \
           invoke, with authentication, rate limiting, and audit logging built in."),
        lb("Data access -- Query internal databases, CRMs, ERPs without exposing connection \
            strings"),
        lb("API orchestration -- Compose multi-step API calls into single agent-friendly tools"),
        lb("File operations -- Read/write documents in SharePoint, OneDrive with proper \
            permissions"),
        lb("Custom logic -- Business rules, calculations, validations specific to your domain"),
        h("Governance Framework"),
        p("AgentRails enforces governance at every layer:"),
        sub("Spending Policies"),
        b("Per-agent budget limits (daily, weekly, monthly)"),
        b("Per-transaction caps"),
        b("Destination address whitelists"),
        b("Rate controls (max transactions per minute/hour)"),
        sub("Security Roles (Dataverse)"),
        lb("System Admin -- Full access to all agent and payment operations"),
        lb("Finance Manager -- Revenue reports, spending policies, transaction queries"),
        lb("Agent Operator -- Agent lifecycle management, status monitoring, kill switches"),
        lb("Auditor -- Read-only access to audit logs, transaction history, policy changes"),
        lb("Read-Only Viewer -- Dashboard viewing only"),
        sub("Audit Trail"),
        p("Every agent action, payment, and policy change is logged with timestamps, user \
           identity, and on-chain transaction hashes. Logs are stored in Dataverse and can be \
           surfaced via Power BI dashboards or queried through the Copilot Studio FinanceOps \
           actions."),
        h("Deployment Options"),
        sub("Hosted (Pro Tier)"),
        p("AgentRails runs the x402 facilitator, API server, and admin dashboard. You connect \
           your Copilot Studio agents via the OpenAPI connector. Best for teams that want fast \
           time-to-value without infrastructure management."),
        sub("Self-Hosted (Enterprise Tier)"),
        p("Full source code deployed on your own infrastructure. ASP.NET Core 8.0 API with \
           PostgreSQL, deployed to Azure App Service, Azure Container Apps, or any Docker host. \
           Includes policy engine, admin dashboard, and all Copilot Studio integrations. Best for \
           regulated industries or organizations requiring full data sovereignty."),
        h("Open Source Repositories"),
        b("agentrails-powerplatform-demo -- Custom connector (24 ops), Power Automate flows, \
           solution package"),
        b("agentrails-copilot-actions -- FinanceOps + Agent Executor Copilot Studio actions"),
        b("agentrails-dataverse-integration -- Table definitions, sync flows, security roles"),
        Block::info_box(
            "Book an Architecture Review",
            "We offer 2-week assessment engagements to audit your M365 environment, map agent use \
             cases, and design the governance framework. Contact sales@agentrails.io",
        ),
    ]
}

fn protocol_whitepaper() -> Vec<Block> {
    vec![
        h("Abstract"),
        p("The x402 protocol enables HTTP-native payments for AI agents and automated systems. By \
           leveraging HTTP status code 402 (Payment Required), the protocol allows any API to \
           request payment inline with the HTTP request/response cycle. Agents pay per-request in \
           USDC stablecoin using EIP-3009 (transferWithAuthorization), eliminating the need for \
           API keys, subscription tiers, and manual credential management."),
        p("This whitepaper describes the x402 V2 protocol specification as implemented by \
           AgentRails, including the payment flow, security model, network support, and \
           enterprise governance extensions."),
        h("The Problem"),
        p("Today's API economy relies on a stack of legacy abstractions: developer portals, API \
           keys, OAuth tokens, subscription tiers, and monthly invoices. This model was designed \
           for human developers, not autonomous agents."),
        p("For AI agents, this model breaks down:"),
        b("Agents cannot sign up for accounts or complete email verification"),
        b("API keys are static secrets that must be provisioned, stored, and rotated"),
        b("Subscription tiers force pre-commitment to usage levels"),
        b("Each new vendor requires human approval and procurement"),
        b("Invoice reconciliation across dozens of services is operationally expensive"),
        p("The result: agents are bottlenecked by human gatekeeping at every API boundary. The \
           x402 protocol removes this bottleneck by making payment the authentication mechanism."),
        h("Protocol Design"),
        sub("Core Principle"),
        p("x402 uses HTTP status code 402 (Payment Required) as defined in RFC 7231. The protocol \
           is stateless, requires no pre-registration, and works with any HTTP client that can \
           read response headers and retry requests."),
        sub("Payment Flow"),
        p("1. CLIENT sends a standard HTTP request to a protected endpoint."),
        p("2. SERVER returns HTTP 402 with a PAYMENT-REQUIRED header containing a base64-encoded \
           JSON payload specifying: protocol version, price (in smallest units), currency, \
           network (CAIP-2 format), receiver address, and payment description."),
        p("3. CLIENT inspects the payment requirements, checks budget limits, and signs an \
           EIP-3009 transferWithAuthorization message using the agent's wallet private key."),
        p("4. CLIENT retries the original request with a PAYMENT-SIGNATURE header containing the \
           signed payment payload (from, to, value, validAfter, validBefore, nonce, signature)."),
        p("5. SERVER (or facilitator) verifies the signature off-chain using EIP-712 typed data \
           hashing and ECDSA signature recovery. If valid, the facilitator submits the \
           transferWithAuthorization transaction on-chain."),
        p("6. SERVER returns the requested data along with a PAYMENT-RESPONSE header containing \
           the transaction hash and settlement status."),
        h("Security Model"),
        sub("EIP-3009: transferWithAuthorization"),
        p("x402 uses EIP-3009, a USDC-native standard that allows gasless, authorized transfers. \
           The payer signs a typed data message (EIP-712) authorizing a specific transfer. The \
           facilitator submits the transaction, paying gas fees on behalf of the agent. This \
           means:"),
        b("Agents never need native gas tokens (ETH, etc.)"),
        b("Each authorization is single-use (unique nonce)"),
        b("Authorizations have time bounds (validAfter, validBefore)"),
        b("The payer's private key never leaves the agent's environment"),
        sub("Off-Chain Verification"),
        p("Before submitting on-chain, the facilitator verifies the signature off-chain using \
           EIP-712 typed data hashing and ecrecover. This prevents invalid transactions from \
           consuming gas and enables sub-second verification."),
        sub("Facilitator Role"),
        p("The facilitator is a trusted intermediary that verifies signatures and submits \
           on-chain transactions. In hosted mode, AgentRails operates the facilitator. In \
           enterprise mode, organizations run their own facilitator with full control over \
           settlement timing, batching, and network selection."),
        h("Network Support"),
        p("x402 V2 supports multiple EVM-compatible networks using CAIP-2 identifiers:"),
        lb("Base (eip155:8453) -- Coinbase L2, low gas fees, fast finality"),
        lb("Base Sepolia (eip155:84532) -- Base testnet for development"),
        lb("Ethereum (eip155:1) -- Ethereum mainnet for high-value transactions"),
        lb("Ethereum Sepolia (eip155:11155111) -- Ethereum testnet"),
        lb("Arc (eip155:5042002) -- Circle's L2 with native USDC (testnet)"),
        p("Multi-network support allows servers to accept payment on any supported chain, and \
           agents can pay on the network with the lowest fees or fastest settlement."),
        h("Enterprise Extensions"),
        p("AgentRails extends the base x402 protocol with enterprise governance features:"),
        lb("Policy engine -- Server-side enforcement of spending limits, rate controls, and \
            destination rules"),
        lb("Audit logging -- Every payment decision logged with timestamps, agent identity, and \
            on-chain hashes"),
        lb("Kill switches -- Instantly revoke an agent's payment capability"),
        lb("Approval workflows -- Route high-value transactions through human approval via Power \
            Automate"),
        lb("Trust scoring -- Verify service reputation before authorizing payment"),
        h("SDK Integrations"),
        p("AgentRails provides SDK packages that handle the full x402 flow automatically. When an \
           agent's HTTP request receives a 402 response, the SDK:"),
        b("Parses the PAYMENT-REQUIRED header"),
        b("Checks the agent's budget and policy limits"),
        b("Signs the EIP-3009 authorization"),
        b("Retries the request with the PAYMENT-SIGNATURE header"),
        b("Returns the data to the agent transparently"),
        p("Available SDKs:"),
        b("langchain-x402 (PyPI) -- LangChain toolkit with x402 payment tools"),
        b("crewai-x402 (PyPI) -- CrewAI toolkit for multi-agent payment crews"),
        b("AgentRails.SemanticKernel.X402 (NuGet) -- Semantic Kernel plugin"),
        b("AgentRails.AgentFramework.X402 (NuGet) -- Microsoft Agent Framework tools"),
        b("Copilot Studio connector -- OpenAPI spec import for Power Platform"),
        h("Comparison: x402 vs Traditional API Access"),
        p("Traditional: Sign up, verify email, add credit card, generate API key, store securely, \
           rotate periodically, pay monthly subscription regardless of usage, reconcile invoices."),
        p("x402: Agent calls API, gets 402, pays exact amount per-request, gets instant access. No \
           signup, no credentials, no subscriptions. Every payment is cryptographically \
           verifiable."),
        Block::info_box(
            "Learn More",
            "Protocol spec: github.com/kmatthewsio/AgenticCommerce  |  Docs: \
             www.agentrails.io/docs  |  Sandbox: sandbox.agentrails.io/swagger",
        ),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/documents.rs"]
mod tests;

//! Bundled article corpus. Publish times are offsets from the seed instant
//! so the feed always has a mix of fresh and day-old stories.

use chrono::{DateTime, Duration, Utc};

use crate::types::{Article, ArticleSummary, SourceInfo};

pub fn seed_articles(now: DateTime<Utc>) -> Vec<Article> {
    vec![
        Article {
            id: "openai-gpt5-roadmap".into(),
            title: "OpenAI details roadmap toward GPT-5 with focus on agentic reliability".into(),
            url: "https://openai.com/research/gpt-5-roadmap".into(),
            source: SourceInfo {
                name: "OpenAI Research".into(),
                domain: "openai.com".into(),
            },
            published_at: now - Duration::hours(3),
            summary: ArticleSummary {
                beginner: "OpenAI shared how the next GPT version will better plan actions and verify itself so it makes fewer mistakes when helping people.".into(),
                expert: "The roadmap highlights iterative agent alignment techniques, including tool-use safety filters, decomposed planning, and benchmark suites for measuring latent inconsistencies in long-horizon reasoning.".into(),
                why_it_matters: vec![
                    "Signals OpenAI's priorities beyond raw scale.".into(),
                    "Introduces measurable agent reliability metrics.".into(),
                    "Provides timelines for developer preview access.".into(),
                ],
            },
            tags: vec!["LLMs".into(), "Agents".into(), "Safety".into()],
            topics: vec!["openai".into(), "agents".into(), "alignment".into()],
            cluster_id: "gpt5-roadmap".into(),
            engagement_score: 0.86,
            authority_score: 0.9,
            excerpt: "OpenAI positioned GPT-5 as a more deliberate assistant, featuring structured memory, native retrieval, and layered verification pipelines designed to improve consistency across extended tool interactions.".into(),
        },
        Article {
            id: "anthropic-constitutional-updates".into(),
            title: "Anthropic expands constitutional AI to handle safety incidents in real time".into(),
            url: "https://www.anthropic.com/news/constitutional-ai-updates".into(),
            source: SourceInfo {
                name: "Anthropic".into(),
                domain: "anthropic.com".into(),
            },
            published_at: now - Duration::hours(7),
            summary: ArticleSummary {
                beginner: "Anthropic upgraded Claude so it can watch for risky requests and apply its rulebook instantly instead of waiting for human review.".into(),
                expert: "Claude now executes hierarchical policy checks with real-time intervention hooks, paired with red-team simulations to measure containment across streaming conversations.".into(),
                why_it_matters: vec![
                    "Raises the bar for proactive model safety tooling.".into(),
                    "Gives enterprises clearer compliance audit trails.".into(),
                    "Hints at Claude's positioning for regulated industries.".into(),
                ],
            },
            tags: vec!["Safety".into(), "Policy".into()],
            topics: vec!["anthropic".into(), "claude".into(), "governance".into()],
            cluster_id: "constitutional-safety".into(),
            engagement_score: 0.74,
            authority_score: 0.88,
            excerpt: "Anthropic's latest safety bundle brings policy-as-code templates, live dashboards, and watchdog agents that can pause or reroute conversations when sensitive intent is detected.".into(),
        },
        Article {
            id: "google-gemini-1-5-pro".into(),
            title: "Google ships Gemini 1.5 Pro with 10M token context and developer autopilot".into(),
            url: "https://blog.google/technology/ai/gemini-1-5-pro".into(),
            source: SourceInfo {
                name: "Google AI".into(),
                domain: "blog.google".into(),
            },
            published_at: now - Duration::minutes(30),
            summary: ArticleSummary {
                beginner: "Google released a new Gemini version that can remember giant documents and has helpers that write tests, build apps, and watch for errors.".into(),
                expert: "Gemini 1.5 Pro extends multimodal context windows to 10M tokens via hybrid attention routing and adds developer autopilot workflows that integrate with Vertex AI and Firebase shipping pipelines.".into(),
                why_it_matters: vec![
                    "Massive context windows reshape RAG strategies.".into(),
                    "Autopilot tooling competes directly with GitHub Copilot Enterprise.".into(),
                    "Signals acceleration of Google's enterprise AI suite.".into(),
                ],
            },
            tags: vec!["LLMs".into(), "Tools".into(), "Industry".into()],
            topics: vec!["google".into(), "gemini".into(), "developer-tools".into()],
            cluster_id: "gemini-1-5-pro".into(),
            engagement_score: 0.92,
            authority_score: 0.85,
            excerpt: "Google positions Gemini 1.5 Pro as the default model for multi-document agent workflows, bundling auto-documentation features and context-aware error triage inside Google Cloud's AI Studio.".into(),
        },
        Article {
            id: "meta-segment-anything-2".into(),
            title: "Meta open-sources Segment Anything 2 with continual video understanding".into(),
            url: "https://ai.meta.com/blog/segment-anything-2".into(),
            source: SourceInfo {
                name: "Meta AI".into(),
                domain: "ai.meta.com".into(),
            },
            published_at: now - Duration::hours(24),
            summary: ArticleSummary {
                beginner: "Meta's new image tool can now track objects in videos and keeps learning from feedback while you use it.".into(),
                expert: "Segment Anything 2 introduces memory-efficient mask transformers with continual fine-tuning hooks, enabling per-frame adaptation without catastrophic forgetting in video segmentation tasks.".into(),
                why_it_matters: vec![
                    "Advances open computer-vision tooling for robotics.".into(),
                    "Community can adapt it for safety monitoring.".into(),
                    "Meta continues its open-source momentum.".into(),
                ],
            },
            tags: vec!["Research".into(), "Tools".into()],
            topics: vec!["meta".into(), "vision".into(), "open-source".into()],
            cluster_id: "segment-anything-2".into(),
            engagement_score: 0.68,
            authority_score: 0.8,
            excerpt: "The release packages SAM2 weights, evaluation scripts, and a streaming fine-tuner that consumes low-latency feedback from AR glasses and drones, pointing at industrial inspection scenarios.".into(),
        },
        Article {
            id: "arxiv-rag-latency".into(),
            title: "Researchers map retrieval-augmented generation latency bottlenecks across enterprise stacks".into(),
            url: "https://arxiv.org/abs/2406.01923".into(),
            source: SourceInfo {
                name: "arXiv".into(),
                domain: "arxiv.org".into(),
            },
            published_at: now - Duration::hours(5),
            summary: ArticleSummary {
                beginner: "A research team studied why chatbots that look up documents are slow and offers tips to make them faster.".into(),
                expert: "The paper benchmarks retrieval latency contributions from vector indexes, embedding fan-out, and reranker depth, proposing adaptive pipeline scheduling that reduces P95 latency by 38%.".into(),
                why_it_matters: vec![
                    "Gives architects reference numbers for real deployments.".into(),
                    "Highlights trade-offs between cost and accuracy.".into(),
                    "Framework includes open-source profiler for RAG ops.".into(),
                ],
            },
            tags: vec!["Research".into(), "LLMs".into()],
            topics: vec!["rag".into(), "latency".into(), "evaluation".into()],
            cluster_id: "rag-latency".into(),
            engagement_score: 0.61,
            authority_score: 0.78,
            excerpt: "The authors profiled 18 enterprise knowledge bases and released a toolkit that visualizes chunk freshness, embedding drift, and GPU saturation to guide hybrid search strategies.".into(),
        },
        Article {
            id: "eu-ai-act-implementation".into(),
            title: "EU AI Act transitions from law to implementation with new oversight board".into(),
            url: "https://ec.europa.eu/ai-act/implementation".into(),
            source: SourceInfo {
                name: "European Commission".into(),
                domain: "ec.europa.eu".into(),
            },
            published_at: now - Duration::hours(12),
            summary: ArticleSummary {
                beginner: "The EU set up the group that will make sure AI rules are followed, including how risky systems are checked.".into(),
                expert: "The Commission established the AI Office with delegated powers for conformity assessments, harmonised standards, and a sandbox for cross-border testing with high-risk providers.".into(),
                why_it_matters: vec![
                    "Timeline clarity for compliance teams.".into(),
                    "Signals how global policy is converging.".into(),
                    "Opens guidance for foundation model registries.".into(),
                ],
            },
            tags: vec!["Policy".into(), "Safety".into()],
            topics: vec!["policy".into(), "europe".into(), "compliance".into()],
            cluster_id: "eu-ai-act".into(),
            engagement_score: 0.58,
            authority_score: 0.95,
            excerpt: "The AI Office will coordinate national authorities, publish risk management templates, and run shared evaluation centers for foundation models deployed in critical sectors.".into(),
        },
        Article {
            id: "microsoft-azure-phi3".into(),
            title: "Microsoft previews Phi-3 small models optimized for on-device copilots".into(),
            url: "https://azure.microsoft.com/blog/phi-3-preview".into(),
            source: SourceInfo {
                name: "Microsoft Azure".into(),
                domain: "azure.microsoft.com".into(),
            },
            published_at: now - Duration::hours(2),
            summary: ArticleSummary {
                beginner: "Microsoft built smaller AI models that run on laptops and phones but still handle coding and math support.".into(),
                expert: "Phi-3 family targets 3-14B params with quantization-aware training, delivering 1.8x efficiency on Snapdragon X Elite and integrating with Windows Copilot Studio pipelines.".into(),
                why_it_matters: vec![
                    "Advances edge deployment for copilots.".into(),
                    "Combines with Microsoft AI PCs push.".into(),
                    "Enables cost-effective private workloads.".into(),
                ],
            },
            tags: vec!["Tools".into(), "Industry".into()],
            topics: vec!["microsoft".into(), "phi".into(), "edge".into()],
            cluster_id: "phi3-preview".into(),
            engagement_score: 0.77,
            authority_score: 0.83,
            excerpt: "Microsoft is bundling Phi-3 with device provisioning kits, bringing offline intents, locally cached embeddings, and connectors to hybrid semantic search services.".into(),
        },
        Article {
            id: "stability-stable-diffusion-4".into(),
            title: "Stability AI introduces Stable Diffusion 4 focusing on cinematic control".into(),
            url: "https://stability.ai/blog/stable-diffusion-4".into(),
            source: SourceInfo {
                name: "Stability AI".into(),
                domain: "stability.ai".into(),
            },
            published_at: now - Duration::hours(4),
            summary: ArticleSummary {
                beginner: "Stable Diffusion's latest model lets creators control camera angles and lighting with simple instructions.".into(),
                expert: "SD4 debuts cinematic diffusion schedulers with physically-aware lighting modules and supports multi-shot storyboards through new ControlNet adapters.".into(),
                why_it_matters: vec![
                    "Gives artists granular scene control.".into(),
                    "Expands open-source alternative to Sora.".into(),
                    "Improves video-to-image consistency for studios.".into(),
                ],
            },
            tags: vec!["Tools".into(), "Industry".into()],
            topics: vec!["stability".into(), "generative-media".into(), "controlnet".into()],
            cluster_id: "stable-diffusion-4".into(),
            engagement_score: 0.64,
            authority_score: 0.73,
            excerpt: "The release includes cinematic LUT presets, timeline-aware prompt curves, and an evaluation set measuring narrative coherence across multi-scene renders.".into(),
        },
        Article {
            id: "mit-robust-agent-evals".into(),
            title: "MIT proposes standardized evaluations for autonomous research agents".into(),
            url: "https://news.mit.edu/2024/robust-agent-evaluations".into(),
            source: SourceInfo {
                name: "MIT News".into(),
                domain: "news.mit.edu".into(),
            },
            published_at: now - Duration::hours(18),
            summary: ArticleSummary {
                beginner: "MIT scientists created tests to see if AI research assistants stay on track and avoid risky shortcuts.".into(),
                expert: "The benchmark suite stress-tests tool-using agents with adversarial instructions, assessing corrigibility, provenance tracking, and reproducibility of generated experiments.".into(),
                why_it_matters: vec![
                    "Helps labs vet autonomous research assistants.".into(),
                    "Encourages transparency around tool usage logs.".into(),
                    "Aligns with calls for frontier safety metrics.".into(),
                ],
            },
            tags: vec!["Research".into(), "Safety".into()],
            topics: vec!["agents".into(), "evaluation".into(), "mit".into()],
            cluster_id: "agent-evals".into(),
            engagement_score: 0.55,
            authority_score: 0.82,
            excerpt: "MIT's agent evals ship with open-source tasks covering lab automation, literature review, and data analysis, with built-in anomaly detection for unsanctioned tool flows.".into(),
        },
        Article {
            id: "x-open-source-guardian".into(),
            title: "Community launches Guardian, a safety watchdog for open-source AI agents".into(),
            url: "https://github.com/guardian-agent/guardian".into(),
            source: SourceInfo {
                name: "GitHub".into(),
                domain: "github.com".into(),
            },
            published_at: now - Duration::hours(6),
            summary: ArticleSummary {
                beginner: "Developers released Guardian, a tool that watches AI agents and stops them if they try something unsafe.".into(),
                expert: "Guardian hooks into open-source agent frameworks, enforcing policy graphs, tool allow-lists, and sandboxed execution with human-in-the-loop overrides.".into(),
                why_it_matters: vec![
                    "Brings safety rails to hobbyist agent stacks.".into(),
                    "Complements enterprise guardrails with open tooling.".into(),
                    "Encourages community red-teaming.".into(),
                ],
            },
            tags: vec!["Safety".into(), "Open Source".into()],
            topics: vec!["agents".into(), "safety".into(), "community".into()],
            cluster_id: "guardian-agent".into(),
            engagement_score: 0.49,
            authority_score: 0.6,
            excerpt: "Guardian integrates with AutoGen and LangChain, offering runtime monitors for file access, network calls, and high-risk tool invocations, plus Discord alerts for maintainers.".into(),
        },
        Article {
            id: "nvidia-blackwell-industrial".into(),
            title: "NVIDIA teams with Siemens to deploy Blackwell AI for industrial twins".into(),
            url: "https://blogs.nvidia.com/blog/blackwell-siemens-industrial".into(),
            source: SourceInfo {
                name: "NVIDIA".into(),
                domain: "nvidia.com".into(),
            },
            published_at: now - Duration::hours(9),
            summary: ArticleSummary {
                beginner: "NVIDIA and Siemens are pairing new chips with digital twins so factories can test ideas virtually before building them.".into(),
                expert: "The partnership links Blackwell GPUs with Siemens Xcelerator to run photoreal industrial twins, combining Omniverse cloud APIs with domain-adapted foundation models for predictive maintenance.".into(),
                why_it_matters: vec![
                    "Connects AI hardware advances to real industry impact.".into(),
                    "Shows how digital twins speed up climate-friendly retrofits.".into(),
                    "Expands NVIDIA's ecosystem lock-in for enterprise AI.".into(),
                ],
            },
            tags: vec!["Industry".into(), "Tools".into()],
            topics: vec!["nvidia".into(), "industry".into(), "digital-twin".into()],
            cluster_id: "nvidia-siemens".into(),
            engagement_score: 0.71,
            authority_score: 0.84,
            excerpt: "Customers get access to Omniverse-powered simulation templates that sync with Siemens automation gear, plus domain-specific LLMs that translate maintenance logs into actionable work orders.".into(),
        },
        Article {
            id: "policy-ai-safety-hearing".into(),
            title: "US Senate hearing spotlights AI safety incident reporting gaps".into(),
            url: "https://www.congress.gov/hearings/ai-safety-reporting".into(),
            source: SourceInfo {
                name: "US Senate".into(),
                domain: "congress.gov".into(),
            },
            published_at: now - Duration::hours(15),
            summary: ArticleSummary {
                beginner: "Lawmakers questioned tech leaders about why AI incidents aren't reported quickly and how to fix it.".into(),
                expert: "Witnesses proposed binding disclosure timelines, independent auditing bodies, and liability safe harbors for sharing near-miss AI incidents across competitors.".into(),
                why_it_matters: vec![
                    "Could shape US safety reporting rules.".into(),
                    "Highlights multi-stakeholder pressure for transparency.".into(),
                    "Signals bipartisan appetite for baseline standards.".into(),
                ],
            },
            tags: vec!["Policy".into(), "Safety".into()],
            topics: vec!["policy".into(), "us".into(), "safety".into()],
            cluster_id: "us-safety-hearing".into(),
            engagement_score: 0.52,
            authority_score: 0.77,
            excerpt: "Industry and academic witnesses urged Congress to fund an incident clearinghouse, citing the need for standardized taxonomies and whistleblower protections.".into(),
        },
        Article {
            id: "deepmind-weather-agent".into(),
            title: "DeepMind debuts weather agent that explains uncertainty in natural language".into(),
            url: "https://deepmind.google/discover/blog/weather-agent".into(),
            source: SourceInfo {
                name: "Google DeepMind".into(),
                domain: "deepmind.google".into(),
            },
            published_at: now - Duration::hours(8),
            summary: ArticleSummary {
                beginner: "DeepMind built a weather AI that tells you how sure it is about forecasts and why.".into(),
                expert: "The system fuses graph neural nowcasting with language explanations, surfacing calibrated confidence bands and historical analogs for severe weather advisories.".into(),
                why_it_matters: vec![
                    "Shows trustworthy communication for critical AI.".into(),
                    "Bridges climate models with conversational AI.".into(),
                    "Supports emergency planners with plain-language alerts.".into(),
                ],
            },
            tags: vec!["Research".into(), "Industry".into()],
            topics: vec!["weather".into(), "explainability".into(), "deepmind".into()],
            cluster_id: "weather-agent".into(),
            engagement_score: 0.66,
            authority_score: 0.81,
            excerpt: "DeepMind paired the weather agent with real-time data assimilation and open APIs so city planners can query storm scenarios in beginner or expert language modes.".into(),
        },
    ]
}

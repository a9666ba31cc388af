// src/infrastructure/fixtures/dataset.rs
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::article::{Article, ArticleId, ViewCount};
use crate::domain::author::{Author, AuthorId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::Slug;
use crate::domain::taxonomy::{Category, CategoryId, Tag, TagId};

/// Articles, categories and tags served by the fixture store. Articles
/// carry their own author and taxonomy, so the three lists only need to
/// agree on slugs.
#[derive(Debug, Clone, Default)]
pub struct FixtureDataset {
    pub articles: Vec<Article>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
}

impl FixtureDataset {
    pub fn new(articles: Vec<Article>, categories: Vec<Category>, tags: Vec<Tag>) -> Self {
        Self {
            articles,
            categories,
            tags,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The record shown in place of an unknown slug: the first published
    /// article.
    pub fn featured(&self) -> Option<&Article> {
        self.articles.iter().find(|article| article.published)
    }

    /// Category shown in place of an unknown slug: the lowest id.
    pub fn featured_category(&self) -> Option<&Category> {
        self.categories.iter().min_by_key(|category| category.id)
    }

    /// Tag shown in place of an unknown slug: the lowest id.
    pub fn featured_tag(&self) -> Option<&Tag> {
        self.tags.iter().min_by_key(|tag| tag.id)
    }

    /// The portal's built-in sample content.
    pub fn sample() -> DomainResult<Self> {
        let categories = sample_categories()?;
        let tags = sample_tags()?;
        let authors = sample_authors()?;

        let category = |slug: &str| lookup(&categories, slug, |c| c.slug.as_str());
        let tag = |slug: &str| lookup(&tags, slug, |t| t.slug.as_str());

        let mut articles = Vec::new();
        for sample in ARTICLES {
            let author = authors
                .get(sample.author)
                .cloned()
                .ok_or_else(|| DomainError::NotFound(format!("author #{}", sample.author)))?;
            let (year, month, day) = sample.published_on;
            let published_at = utc_date(year, month, day)?;

            articles.push(Article {
                id: ArticleId::new(sample.id)?,
                slug: Slug::new(sample.slug)?,
                title: sample.title.to_owned(),
                excerpt: Some(sample.excerpt.to_owned()),
                content: sample.content.to_owned(),
                published: true,
                published_at: Some(published_at),
                updated_at: Some(published_at + chrono::Duration::days(1)),
                view_count: ViewCount::new(sample.views),
                featured_image: Some(format!("/images/featured-{}.jpg", sample.id)),
                author,
                categories: sample
                    .categories
                    .iter()
                    .map(|slug| category(slug))
                    .collect::<DomainResult<_>>()?,
                tags: sample
                    .tags
                    .iter()
                    .map(|slug| tag(slug))
                    .collect::<DomainResult<_>>()?,
            });
        }

        Ok(Self::new(articles, categories, tags))
    }
}

fn lookup<T: Clone>(entries: &[T], slug: &str, key: impl Fn(&T) -> &str) -> DomainResult<T> {
    entries
        .iter()
        .find(|entry| key(entry) == slug)
        .cloned()
        .ok_or_else(|| DomainError::NotFound(format!("fixture taxonomy '{slug}'")))
}

fn utc_date(year: i32, month: u32, day: u32) -> DomainResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or_else(|| DomainError::Validation(format!("invalid date {year}-{month}-{day}")))
}

fn sample_authors() -> DomainResult<Vec<Author>> {
    [
        (1, "山田太郎", "yamada@example.com"),
        (2, "佐藤花子", "sato@example.com"),
        (3, "鈴木一郎", "suzuki@example.com"),
        (4, "田中誠", "tanaka@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| {
        Ok(Author {
            id: AuthorId::new(id)?,
            name: name.to_owned(),
            email: email.to_owned(),
        })
    })
    .collect()
}

fn sample_categories() -> DomainResult<Vec<Category>> {
    [
        (1, "ビジネス戦略", "business-strategy", "AIをビジネスに活用するための戦略や企画に関する情報"),
        (2, "技術動向", "technology-trends", "最新のAI技術トレンドや将来の展望に関する情報"),
        (3, "導入事例", "case-studies", "様々な業界におけるAI導入の成功事例と失敗から学ぶ教訓"),
        (4, "実装ガイド", "implementation-guides", "AIシステムの導入手順や技術的な実装に関するガイド"),
        (5, "法律・規制", "legal-regulatory", "AI技術に関連する法規制や倫理的問題の解説"),
        (6, "人材育成", "talent-development", "AI時代に求められる人材スキルと育成方法"),
        (7, "リサーチ", "research", "AI分野の最新研究動向と論文解説"),
        (8, "インフラストラクチャ", "infrastructure", "AI導入に必要なITインフラと最適化手法"),
        (9, "AI活用", "ai-utilization", "現場でのAI活用ノウハウ"),
    ]
    .into_iter()
    .map(|(id, name, slug, description)| {
        Ok(Category {
            id: CategoryId::new(id)?,
            name: name.to_owned(),
            slug: Slug::new(slug)?,
            description: Some(description.to_owned()),
        })
    })
    .collect()
}

fn sample_tags() -> DomainResult<Vec<Tag>> {
    [
        (1, "ChatGPT", "chatgpt"),
        (2, "機械学習", "machine-learning"),
        (3, "ディープラーニング", "deep-learning"),
        (4, "ビジネス活用", "business-use"),
        (5, "ROI", "roi"),
        (6, "自然言語処理", "nlp"),
        (7, "データ分析", "data-analysis"),
        (8, "予測モデル", "predictive-models"),
        (9, "コンピュータビジョン", "computer-vision"),
        (10, "API活用", "api-integration"),
        (11, "プロンプトエンジニアリング", "prompt-engineering"),
        (12, "AI戦略", "ai-strategy"),
        (13, "データプライバシー", "data-privacy"),
        (14, "Cloud AI", "cloud-ai"),
        (15, "AI倫理", "ai-ethics"),
        (16, "レコメンデーション", "recommendation-systems"),
        (17, "チャットボット", "chatbots"),
        (18, "AIガバナンス", "ai-governance"),
        (19, "AIパイプライン", "ai-pipelines"),
        (20, "強化学習", "reinforcement-learning"),
        (21, "AI", "ai"),
        (22, "デジタルトランスフォーメーション", "dx"),
        (23, "ビジネスモデル", "business-model"),
    ]
    .into_iter()
    .map(|(id, name, slug)| {
        Ok(Tag {
            id: TagId::new(id)?,
            name: name.to_owned(),
            slug: Slug::new(slug)?,
            description: None,
        })
    })
    .collect()
}

struct SampleArticle {
    id: i64,
    slug: &'static str,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    published_on: (i32, u32, u32),
    /// Index into `sample_authors()`.
    author: usize,
    views: u64,
    categories: &'static [&'static str],
    tags: &'static [&'static str],
}

const ARTICLES: &[SampleArticle] = &[
    SampleArticle {
        id: 1,
        slug: "ai-transformation-changes",
        title: "AIトランスフォーメーションが企業にもたらす5つの大きな変化",
        excerpt: "人工知能技術の進化により、企業のビジネスモデルや業務プロセスが根本から変わりつつあります。本記事では、AIが企業にもたらす5つの重要な変化について解説します。",
        content: TRANSFORMATION_CHANGES_BODY,
        published_on: (2023, 10, 15),
        author: 0,
        views: 1250,
        categories: &["business-strategy", "ai-utilization"],
        tags: &["ai", "dx", "business-model"],
    },
    SampleArticle {
        id: 2,
        slug: "ai-trends-2024",
        title: "2024年に注目すべきAI技術トレンド最新情報",
        excerpt: "急速に進化するAI技術。2024年に特に注目すべき最新トレンドと、それらがビジネスに与える影響について詳しく解説します。",
        content: "# 2024年に注目すべきAI技術トレンド\n\n生成AI、マルチモーダルモデル、エッジAIなど、2024年に押さえておくべき技術動向を整理します。\n\n## マルチモーダルAI\n\nテキスト・画像・音声を横断して理解するモデルが実用段階に入りました。\n\n## エッジAI\n\n推論を端末側で行うことで、遅延とコストを抑えられます。\n",
        published_on: (2023, 10, 10),
        author: 1,
        views: 1180,
        categories: &["technology-trends"],
        tags: &["machine-learning", "deep-learning", "ai"],
    },
    SampleArticle {
        id: 3,
        slug: "ai-transformation-manufacturing",
        title: "AIトランスフォーメーション成功事例：製造業の革新",
        excerpt: "製造業界におけるAIトランスフォーメーションの成功事例を紹介。生産性向上からコスト削減まで、実際のビジネスインパクトを検証します。",
        content: "# 製造業の革新\n\n予測メンテナンスと画像検査の導入事例から、AIが生産現場にもたらした効果を検証します。\n\n- ダウンタイムの削減\n- 不良品率の低下\n- 熟練技能の継承\n",
        published_on: (2023, 10, 5),
        author: 2,
        views: 640,
        categories: &["case-studies"],
        tags: &["computer-vision", "predictive-models", "dx"],
    },
    SampleArticle {
        id: 4,
        slug: "chatgpt-business-efficiency",
        title: "ChatGPTを活用した業務効率化：5つの実践的アプローチ",
        excerpt: "ChatGPTをビジネスに導入して業務を効率化する方法を紹介。実際の導入手順から効果測定まで、実践的なアプローチを解説します。",
        content: "# ChatGPTで業務効率化\n\n文書作成、要約、問い合わせ対応など、ChatGPTを業務に組み込むための5つのアプローチを紹介します。\n\n## 効果測定\n\n導入前後の作業時間を比較し、ROIを定量化しましょう。\n",
        published_on: (2023, 9, 28),
        author: 3,
        views: 1020,
        categories: &["implementation-guides"],
        tags: &["chatgpt", "business-use", "prompt-engineering"],
    },
    SampleArticle {
        id: 5,
        slug: "ai-decision-making",
        title: "AIによる意思決定支援：データドリブン経営の新時代",
        excerpt: "AIを活用した意思決定支援システムがもたらす経営の変革。データドリブンな組織作りと戦略立案について解説します。",
        content: "# データドリブン経営\n\nAIによる予測と分析を意思決定プロセスに組み込む方法を解説します。\n",
        published_on: (2023, 9, 20),
        author: 0,
        views: 870,
        categories: &["business-strategy"],
        tags: &["data-analysis", "predictive-models", "ai-strategy"],
    },
    SampleArticle {
        id: 6,
        slug: "generative-ai-copyright",
        title: "生成AIと著作権：企業が知っておくべき法的リスクと対策",
        excerpt: "生成AIコンテンツに関わる著作権の問題と法的リスク。企業がAIを活用する際に注意すべきポイントと対策を解説します。",
        content: "# 生成AIと著作権\n\n学習データの扱いと生成物の権利帰属について、企業が押さえるべき論点を整理します。\n",
        published_on: (2023, 9, 15),
        author: 1,
        views: 760,
        categories: &["legal-regulatory"],
        tags: &["ai-ethics", "ai-governance", "data-privacy"],
    },
    SampleArticle {
        id: 7,
        slug: "ai-roi-calculation",
        title: "AI投資のROI計算方法：経営者のための実践ガイド",
        excerpt: "AI技術への投資対効果を正確に測定し、投資判断を最適化するための実践的な方法論を紹介します。",
        content: "# AI投資のROI\n\nコスト削減効果と売上貢献を分けて測定し、投資判断に活かす方法を紹介します。\n",
        published_on: (2023, 9, 5),
        author: 1,
        views: 520,
        categories: &["business-strategy"],
        tags: &["roi", "ai-strategy"],
    },
    SampleArticle {
        id: 9,
        slug: "ai-organization-building",
        title: "AI戦略を成功させる組織づくり：経営者のための実践ガイド",
        excerpt: "AI導入を成功に導くためには適切な組織構造と文化の構築が不可欠です。本記事では、効果的なAI組織を構築するための具体的な方法を解説します。",
        content: "# AI組織の構築\n\n専門チームの配置、人材育成、部門横断の連携体制について解説します。\n",
        published_on: (2023, 8, 25),
        author: 3,
        views: 430,
        categories: &["business-strategy"],
        tags: &["ai-strategy", "ai-governance"],
    },
    SampleArticle {
        id: 12,
        slug: "ai-competitive-advantage",
        title: "AI時代の競争優位性：データが生み出す新たな経営資源",
        excerpt: "データをどのように活用すれば競争優位性を確立できるのか。AI時代に求められるデータ戦略の立て方と実行方法を解説します。",
        content: "# データが生み出す競争優位\n\n独自データの蓄積と活用が、AI時代の差別化要因になります。\n",
        published_on: (2023, 8, 10),
        author: 2,
        views: 390,
        categories: &["business-strategy"],
        tags: &["data-analysis", "business-model"],
    },
];

const TRANSFORMATION_CHANGES_BODY: &str = r"# AIトランスフォーメーションが企業にもたらす5つの大きな変化

人工知能（AI）技術の急速な発展により、企業のビジネスモデルやオペレーションが根本から変わりつつあります。この「AIトランスフォーメーション」と呼ばれる変革は、単なるテクノロジーの導入にとどまらず、組織全体の思考方法や働き方にまで影響を与えています。

本記事では、AIトランスフォーメーションが企業にもたらす5つの重要な変化について詳しく解説します。

## 1. データ駆動型の意思決定プロセス

AIの最も顕著な影響の一つは、企業の意思決定プロセスの変革です。従来の経験や直感に基づく意思決定から、データ分析とAIによる予測に基づく意思決定へとシフトしています。

### 主なメリット

- **精度の向上**: 人間の直感よりも、大量のデータに基づいた予測の方が精度が高いケースが増えています
- **バイアスの軽減**: 適切に設計されたAIモデルは、人間の判断に潜むバイアスを軽減できます
- **意思決定の迅速化**: 複雑なデータ分析を短時間で行えるため、意思決定のスピードが向上します

## 2. カスタマーエクスペリエンスの再定義

AIは顧客体験を根本から変えることができます。パーソナライゼーションの精度向上から、24時間対応のカスタマーサポートまで、顧客との接点が劇的に変化しています。

## 3. 業務プロセスの自動化による効率化

反復的なタスクの自動化はAIの最も明確な恩恵の一つです。

1. **基本的な自動化**: 定型的なデータ入力やフォーマット変換などの単純作業
2. **インテリジェント自動化**: 一定のルールに基づいた判断を含む処理の自動化
3. **認知的自動化**: 非構造化データを理解し、複雑な判断を行う高度な自動化

## 4. 新しいビジネスモデルの創出

AIは既存のビジネスプロセスを効率化するだけでなく、全く新しいビジネスモデルを生み出すきっかけにもなっています。

## 5. 組織文化と必要なスキルセットの変化

AIの導入は技術的な変革にとどまらず、組織文化や必要とされるスキルセットにも大きな変化をもたらします。

## まとめ

AIトランスフォーメーションは、もはや選択肢ではなく、将来にわたって競争力を維持するための必須の経営課題となっています。
";

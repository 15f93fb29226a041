//! Prompt templates for the workflow stages.
//!
//! Each template carries `{placeholder}` markers substituted by the `build_*`
//! functions below. Absence-handling is deliberately left to the templates:
//! blank optional fields render as "미지정" (unspecified) or "없음" (none)
//! rather than being rejected, and the wording instructs the model how to
//! treat them. The wording itself is the behavioral contract — do not edit it
//! without updating the frontend copy that mirrors it.

use crate::stages::handlers::{
    AbstractRequest, IntroRequest, JournalRequest, LitReviewRequest, ReviewRequest,
    StructureRequest, TopicRequest,
};

/// Stage 0: topic analysis.
pub const TOPIC_PROMPT_TEMPLATE: &str = r#"다음 연구 주제를 N2B 프레임워크로 분석해주세요.

연구 주제: {topic}
분야: {field}
키워드: {keywords}
연구 목적: {purpose}

다음 구조로 분석해주세요:

1. 현재 Best Practice (BP) 3가지 — 이 분야에서 현재 가장 잘 되고 있는 것
2. N2B 구조 분석:
   - Not (현재 BP의 빈틈 5가지) — 구체적 문헌 인용 포함
   - But (그럼에도 불구하고 가능한 새 접근)
   - Because (그래서 이 연구가 필요한 이유, 4가지 방향 제시)
3. 논문화 가능성 (참신성/실현성/기여도/시의성 각 별점)
4. 추천 빅매치 구도 3가지 — 반드시 대립하는 이름 쌍으로 (예: "OO형" vs "XX형")
5. 다음 단계 안내

텍스트 기호(━, ❌, ⚡, ✅, 🏆, 🥊, ✦, 💡)를 활용하여 구조화해주세요."#;

/// Stage 1: literature-review map.
pub const LITERATURE_PROMPT_TEMPLATE: &str = r#"다음 연구 주제에 대한 N2B 문헌리뷰 맵을 만들어주세요.

연구 주제: {topic}
분야: {field}
키워드: {keywords}
검색 범위: {scope}
연구자 지정 논문: {known_papers}

다음 구조로 작성해주세요:

1. N2B 계보 (세대별 진화):
   - 1세대 (초기 접근): 성과 → Not(빈틈) → 대표문헌
   - 2세대 (방법론 발전): 성과 → Not(빈틈) → 대표문헌
   - 3세대 (현재 BP): 성과 → Not(빈틈) → 대표문헌
   - 4세대 (연구 기회): 가능성 → Not(미개척) → ⭐ 연구 기회!

2. 핵심 선행연구 분류 (분야별로 실제 저자명과 연도 포함)

3. 연구 갭 요약 — 핵심 빈틈 한 문장

각 세대 사이에 "↓ 빈틈이 동기가 되어..." 화살표로 연결해주세요."#;

/// Stage 2: paper-structure design.
pub const STRUCTURE_PROMPT_TEMPLATE: &str = r#"다음 연구 주제에 대한 N2B 기반 논문 구조를 설계해주세요.

연구 주제: {topic}
분야: {field}
키워드: {keywords}
논문 유형: {paper_type}
방법론: {methodology}

다음 구조로 설계해주세요:

1. 논문 제목 (한국어 + 영어) — 3가지 후보
2. 전체 구조 (N2B 매핑):
   - 서론 (Not 영역): 배경 → 문제 제기 → 연구 목적
   - 이론적 배경/문헌리뷰: BP 계보
   - 연구 방법 (But 영역): 제안하는 방법론
   - 결과 및 분석: 빅매치 시합 결과
   - 고찰 (Because 영역): 의미와 기여
   - 결론
3. 각 장의 예상 분량 (페이지 수)
4. 핵심 Figure/Table 제안
5. 빅매치 구도 확인"#;

/// Stage 3: introduction drafting.
pub const INTRODUCTION_PROMPT_TEMPLATE: &str = r#"다음 연구 주제에 대한 N2B 기반 서론 초안을 작성해주세요.

연구 주제: {topic}
분야: {field}
키워드: {keywords}
언어: {language}

N2B 4단락 구조로 서론을 작성해주세요:

¶1-2 (배경 + 문제): 이 분야의 중요성과 현재 BP 소개
¶3 (Not — 빈틈): 기존 접근의 한계와 미해결 문제
¶4 (But/Because — 연구 목적): 본 연구의 접근 방식과 필요성

각 단락에 [N2B 구조 표시]를 포함하고, 참고문헌 위치를 (Author, Year) 형식으로 표시해주세요.
서론 뒤에 "N2B 흐름 분석"도 추가해주세요."#;

/// Stage 4: abstract generation.
pub const ABSTRACT_PROMPT_TEMPLATE: &str = r#"다음 연구 주제에 대한 N2B 기반 초록을 작성해주세요.

연구 주제: {topic}
분야: {field}
키워드: {keywords}
목표 단어 수: {word_count}단어
언어: {language}

N2B 초록 구조:
- 문장 1-2 (배경+문제): Not — 현재 상황의 빈틈
- 문장 3-5 (방법+결과): But — 본 연구의 접근과 주요 결과
- 문장 6-7 (의의): Because — 이 연구가 중요한 이유

초록 뒤에 추천 키워드 5개도 제시해주세요."#;

/// Stage 5: journal matching.
pub const JOURNAL_PROMPT_TEMPLATE: &str = r#"다음 연구 주제에 적합한 학술지를 추천해주세요.

연구 주제: {topic}
분야: {field}
키워드: {keywords}
희망 인덱스: {index_type}

각 저널에 대해:
1. 저널명 (약칭)
2. 출판사
3. Impact Factor (최근)
4. 인덱스 (SCI/SCIE/SCOPUS/KCI)
5. 평균 심사 기간
6. 수락율 (추정)
7. 이 주제와의 적합도 (★ 표시)
8. 추천 이유

최소 5개 저널을 추천하되, 국제 저널과 국내 저널을 섞어주세요.
난이도 순서대로 (도전적 → 현실적 → 안전) 정렬해주세요."#;

/// Stage 6: reviewer-response drafting.
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"다음 심사 의견에 대한 N2B 기반 답변을 작성해주세요.

연구 주제: {topic}
심사 의견: {reviewer_comment}
언어: {language}

N2B 답변 구조:
1. Not (심사위원 지적 요약): 정확히 무엇을 지적했는가
2. But (수용/반박): 타당한 부분은 수용, 오해는 근거로 반박
3. Because (수정/보완 근거): 왜 이렇게 수정했는가 / 왜 원래가 맞는가

다음 형식으로 작성:
- Response to Reviewer: 답변 (공손하되 논리적으로)
- Action Taken: 수정 내용 (구체적으로)
- Revised Manuscript: 수정된 부분 표시

심사위원을 존중하면서도 연구의 가치를 지키는 균형 잡힌 답변을 작성해주세요."#;

/// Blank optional fields render as "미지정" (unspecified).
fn or_unspecified(value: &str) -> &str {
    if value.is_empty() {
        "미지정"
    } else {
        value
    }
}

/// Blank paper lists render as "없음" (none).
fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "없음"
    } else {
        value
    }
}

pub fn build_topic_prompt(req: &TopicRequest) -> String {
    TOPIC_PROMPT_TEMPLATE
        .replace("{topic}", &req.topic)
        .replace("{field}", or_unspecified(&req.field))
        .replace("{keywords}", or_unspecified(&req.keywords))
        .replace("{purpose}", or_unspecified(&req.purpose))
}

pub fn build_literature_prompt(req: &LitReviewRequest) -> String {
    LITERATURE_PROMPT_TEMPLATE
        .replace("{topic}", &req.topic)
        .replace("{field}", or_unspecified(&req.field))
        .replace("{keywords}", or_unspecified(&req.keywords))
        .replace("{scope}", &req.scope)
        .replace("{known_papers}", or_none(&req.known_papers))
}

pub fn build_structure_prompt(req: &StructureRequest) -> String {
    STRUCTURE_PROMPT_TEMPLATE
        .replace("{topic}", &req.topic)
        .replace("{field}", or_unspecified(&req.field))
        .replace("{keywords}", or_unspecified(&req.keywords))
        .replace("{paper_type}", &req.paper_type)
        .replace("{methodology}", or_unspecified(&req.methodology))
}

pub fn build_introduction_prompt(req: &IntroRequest) -> String {
    INTRODUCTION_PROMPT_TEMPLATE
        .replace("{topic}", &req.topic)
        .replace("{field}", or_unspecified(&req.field))
        .replace("{keywords}", or_unspecified(&req.keywords))
        .replace("{language}", &req.language)
}

pub fn build_abstract_prompt(req: &AbstractRequest) -> String {
    ABSTRACT_PROMPT_TEMPLATE
        .replace("{topic}", &req.topic)
        .replace("{field}", or_unspecified(&req.field))
        .replace("{keywords}", or_unspecified(&req.keywords))
        .replace("{word_count}", &req.word_count.to_string())
        .replace("{language}", &req.language)
}

pub fn build_journal_prompt(req: &JournalRequest) -> String {
    JOURNAL_PROMPT_TEMPLATE
        .replace("{topic}", &req.topic)
        .replace("{field}", or_unspecified(&req.field))
        .replace("{keywords}", or_unspecified(&req.keywords))
        .replace("{index_type}", &req.index_type)
}

pub fn build_review_prompt(req: &ReviewRequest) -> String {
    REVIEW_PROMPT_TEMPLATE
        .replace("{topic}", &req.topic)
        .replace("{reviewer_comment}", &req.reviewer_comment)
        .replace("{language}", &req.language)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic_request(topic: &str) -> TopicRequest {
        TopicRequest {
            topic: topic.to_string(),
            field: String::new(),
            keywords: String::new(),
            purpose: String::new(),
        }
    }

    #[test]
    fn test_topic_prompt_blank_optionals_render_unspecified() {
        let prompt = build_topic_prompt(&topic_request("중환자 섬망 예측"));
        assert!(prompt.contains("연구 주제: 중환자 섬망 예측"));
        assert!(prompt.contains("분야: 미지정"));
        assert!(prompt.contains("키워드: 미지정"));
        assert!(prompt.contains("연구 목적: 미지정"));
    }

    #[test]
    fn test_topic_prompt_provided_fields_pass_through() {
        let req = TopicRequest {
            topic: "중환자 섬망 예측".to_string(),
            field: "간호학".to_string(),
            keywords: "delirium, ICU".to_string(),
            purpose: String::new(),
        };
        let prompt = build_topic_prompt(&req);
        assert!(prompt.contains("분야: 간호학"));
        assert!(prompt.contains("키워드: delirium, ICU"));
        assert!(prompt.contains("연구 목적: 미지정"));
    }

    #[test]
    fn test_literature_prompt_defaults_and_none_marker() {
        let req = LitReviewRequest {
            topic: "욕창 예방".to_string(),
            field: String::new(),
            keywords: String::new(),
            scope: "최근 5년".to_string(),
            known_papers: String::new(),
        };
        let prompt = build_literature_prompt(&req);
        assert!(prompt.contains("검색 범위: 최근 5년"));
        assert!(prompt.contains("연구자 지정 논문: 없음"));
        assert!(prompt.contains("분야: 미지정"));
    }

    #[test]
    fn test_structure_prompt_paper_type_is_verbatim() {
        let req = StructureRequest {
            topic: "t".to_string(),
            field: String::new(),
            keywords: String::new(),
            paper_type: "종설".to_string(),
            methodology: String::new(),
        };
        let prompt = build_structure_prompt(&req);
        assert!(prompt.contains("논문 유형: 종설"));
        assert!(prompt.contains("방법론: 미지정"));
    }

    #[test]
    fn test_abstract_prompt_interpolates_word_count_and_language() {
        let req = AbstractRequest {
            topic: "t".to_string(),
            field: String::new(),
            keywords: String::new(),
            word_count: 300,
            language: "English".to_string(),
        };
        let prompt = build_abstract_prompt(&req);
        assert!(prompt.contains("목표 단어 수: 300단어"));
        assert!(prompt.contains("언어: English"));
    }

    #[test]
    fn test_journal_prompt_interpolates_index_type() {
        let req = JournalRequest {
            topic: "t".to_string(),
            field: String::new(),
            keywords: String::new(),
            index_type: "SCOPUS".to_string(),
        };
        let prompt = build_journal_prompt(&req);
        assert!(prompt.contains("희망 인덱스: SCOPUS"));
    }

    #[test]
    fn test_review_prompt_interpolates_all_fields_verbatim() {
        let req = ReviewRequest {
            topic: "수술 후 통증 관리".to_string(),
            reviewer_comment: "표본 수가 작다".to_string(),
            language: "한국어".to_string(),
        };
        let prompt = build_review_prompt(&req);
        assert!(prompt.contains("연구 주제: 수술 후 통증 관리"));
        assert!(prompt.contains("심사 의견: 표본 수가 작다"));
        assert!(prompt.contains("언어: 한국어"));
    }

    /// Templates never leak unsubstituted placeholders.
    #[test]
    fn test_no_placeholder_survives_assembly() {
        let prompts = vec![
            build_topic_prompt(&topic_request("t")),
            build_literature_prompt(&LitReviewRequest {
                topic: "t".to_string(),
                field: String::new(),
                keywords: String::new(),
                scope: "최근 5년".to_string(),
                known_papers: String::new(),
            }),
            build_structure_prompt(&StructureRequest {
                topic: "t".to_string(),
                field: String::new(),
                keywords: String::new(),
                paper_type: "원저".to_string(),
                methodology: String::new(),
            }),
            build_introduction_prompt(&IntroRequest {
                topic: "t".to_string(),
                field: String::new(),
                keywords: String::new(),
                language: "한국어".to_string(),
            }),
            build_abstract_prompt(&AbstractRequest {
                topic: "t".to_string(),
                field: String::new(),
                keywords: String::new(),
                word_count: 250,
                language: "한국어".to_string(),
            }),
            build_journal_prompt(&JournalRequest {
                topic: "t".to_string(),
                field: String::new(),
                keywords: String::new(),
                index_type: "SCI/SCIE".to_string(),
            }),
            build_review_prompt(&ReviewRequest {
                topic: "t".to_string(),
                reviewer_comment: "c".to_string(),
                language: "한국어".to_string(),
            }),
        ];
        for prompt in prompts {
            assert!(!prompt.contains('{'), "unsubstituted placeholder in:\n{prompt}");
        }
    }
}

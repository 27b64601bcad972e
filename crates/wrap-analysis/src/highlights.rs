//! Year-in-review highlights: averages, length buckets, records, comparisons.

use std::collections::BTreeMap;

use wrap_core::derived::DerivedConversation;
use wrap_core::enums::{CommunicationStyle, UsageTrend};
use wrap_core::summary::{
    Averages, Comparisons, ConversationHighlight, Headline, LengthBuckets, MonthCount, Records,
    Verbosity,
};

use crate::distribution::{ratio, round_to_tenth};

const QUICK_CHAT_MAX_MESSAGES: u64 = 4;
const MEDIUM_MAX_MESSAGES: u64 = 20;

const WORDS_PER_NOVEL: f64 = 80_000.0;
const WORDS_PER_PAGE: f64 = 300.0;
const WORDS_PER_AUDIOBOOK_HOUR: f64 = 9_000.0;
const WORDS_PER_GREAT_GATSBY: f64 = 47_094.0;
const HUMAN_WORDS_PER_TWEET: f64 = 280.0;

#[must_use]
pub fn averages(headline: &Headline) -> Averages {
    Averages {
        messages_per_conversation: ratio(headline.messages, headline.conversations),
        human_words_per_conversation: ratio(headline.human_words, headline.conversations),
        assistant_words_per_conversation: ratio(headline.assistant_words, headline.conversations),
    }
}

#[must_use]
pub fn length_buckets(conversations: &[DerivedConversation]) -> LengthBuckets {
    let mut buckets = LengthBuckets::default();
    for conversation in conversations {
        if conversation.messages <= QUICK_CHAT_MAX_MESSAGES {
            buckets.quick_chats += 1;
        } else if conversation.messages <= MEDIUM_MAX_MESSAGES {
            buckets.medium += 1;
        } else {
            buckets.deep_dives += 1;
        }
    }
    buckets
}

/// The `limit` conversations with the most messages. Equal counts keep input order.
#[must_use]
pub fn longest(conversations: &[DerivedConversation], limit: usize) -> Vec<ConversationHighlight> {
    let mut ranked = conversations.iter().collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.messages.cmp(&a.messages));
    ranked
        .into_iter()
        .take(limit)
        .map(|conversation| ConversationHighlight {
            name: conversation.name.clone(),
            date: conversation.date,
            messages: conversation.messages,
            human_words: conversation.human_words,
            assistant_words: conversation.assistant_words,
        })
        .collect()
}

/// Busiest month, usage trend, and the top of the longest list.
#[must_use]
pub fn records(
    by_month: &BTreeMap<String, u64>,
    longest: &[ConversationHighlight],
    highlight_limit: usize,
) -> Records {
    Records {
        busiest_month: busiest_month(by_month),
        usage_trend: usage_trend(by_month),
        longest_conversation: longest.first().cloned(),
        top_longest: longest.iter().take(highlight_limit).cloned().collect(),
    }
}

fn busiest_month(by_month: &BTreeMap<String, u64>) -> Option<MonthCount> {
    let mut best: Option<(&String, u64)> = None;
    for (month, &count) in by_month {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((month, count));
        }
    }
    best.map(|(month, count)| MonthCount {
        month: month.clone(),
        count,
    })
}

/// Compares the later half of the sorted months against the earlier half.
/// With an odd number of months the middle one belongs to the later half.
fn usage_trend(by_month: &BTreeMap<String, u64>) -> Option<UsageTrend> {
    if by_month.len() < 2 {
        return None;
    }
    let split = by_month.len() / 2;
    let earlier: u64 = by_month.values().take(split).sum();
    let later: u64 = by_month.values().skip(split).sum();
    Some(if later > earlier {
        UsageTrend::Increasing
    } else {
        UsageTrend::Decreasing
    })
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn comparisons(headline: &Headline) -> Comparisons {
    let words = (headline.human_words + headline.assistant_words) as f64;
    Comparisons {
        novels: words / WORDS_PER_NOVEL,
        pages: words / WORDS_PER_PAGE,
        audiobook_hours: words / WORDS_PER_AUDIOBOOK_HOUR,
        great_gatsbys: words / WORDS_PER_GREAT_GATSBY,
        tweets: headline.human_words as f64 / HUMAN_WORDS_PER_TWEET,
    }
}

/// `None` when the human wrote nothing. The style threshold is applied to
/// the ratio rounded to one decimal; the reported ratio stays unrounded.
#[must_use]
pub fn verbosity(headline: &Headline) -> Option<Verbosity> {
    if headline.human_words == 0 {
        return None;
    }
    let assistant_ratio = ratio(headline.assistant_words, headline.human_words);
    Some(Verbosity {
        assistant_ratio,
        style: CommunicationStyle::from_ratio(round_to_tenth(assistant_ratio)),
    })
}

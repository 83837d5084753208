use vibrato::{Dictionary, SystemDictionaryBuilder, Tokenizer};

use crate::tokenizer::VibratoTokenizer;

/// surface,left_id,right_id,cost,pos,pos1,pos2,pos3,conj_type,conj_form,basic,reading,pronunciation
const LEXICON_CSV: &str = "\
猫,0,0,100,名詞,一般,*,*,*,*,猫,ネコ,ネコ
犬,0,0,100,名詞,一般,*,*,*,*,犬,イヌ,イヌ
が,0,0,100,助詞,格助詞,一般,*,*,*,が,ガ,ガ
好き,0,0,100,名詞,形容動詞語幹,*,*,*,*,好き,スキ,スキ
です,0,0,100,助動詞,*,*,*,特殊・デス,基本形,です,デス,デス
食べ,0,0,100,動詞,自立,*,*,一段,連用形,食べる,タベ,タベ
ます,0,0,100,助動詞,*,*,*,特殊・マス,基本形,ます,マス,マス";

const MATRIX_DEF: &str = "1 1\n0 0 0";
const CHAR_DEF: &str = "DEFAULT 0 1 0";
const UNK_DEF: &str = "DEFAULT,0,0,1000,名詞,一般,*,*,*,*,*,*,*";

/// A seven-word IPADIC-shaped system dictionary
pub fn sample_dictionary() -> Dictionary {
    SystemDictionaryBuilder::from_readers(
        LEXICON_CSV.as_bytes(),
        MATRIX_DEF.as_bytes(),
        CHAR_DEF.as_bytes(),
        UNK_DEF.as_bytes(),
    )
    .unwrap()
}

/// A ready tokenizer over [`sample_dictionary`]
pub fn sample_tokenizer() -> VibratoTokenizer {
    VibratoTokenizer::from_model(Tokenizer::new(sample_dictionary()))
}
